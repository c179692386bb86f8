//! Repository metadata templates: ignore files, tool configuration.

use packsmith_config::{Bundler, CiProvider};

use crate::fragment::{either, field, lit, not, when, Cond, Field, Template};

pub fn gitignore() -> Template {
    Template {
        id: "gitignore",
        body: vec![
            lit("node_modules/\n"),
            when(not(Cond::BundlerIs(Bundler::None)), vec![lit("dist/\n")]),
            when(Cond::Coverage, vec![lit("coverage/\n")]),
            lit("*.log\n"),
        ],
    }
}

pub fn nvmrc() -> Template {
    Template {
        id: "nvmrc",
        body: vec![field(Field::NodeMajor), lit("\n")],
    }
}

pub fn browserslistrc() -> Template {
    Template {
        id: "browserslistrc",
        body: vec![field(Field::BrowsersRaw), lit("\n")],
    }
}

/// Flat ESLint config. Browser modules get browser globals; everything else
/// runs with Node globals.
pub fn eslint_config() -> Template {
    Template {
        id: "eslint-config",
        body: vec![
            lit("export default [\n  {\n    languageOptions: {\n      ecmaVersion: 2022,\n      sourceType: 'module',\n      globals: {\n"),
            either(
                Cond::BrowserModule,
                vec![lit("        window: 'readonly',\n        document: 'readonly',\n")],
                vec![lit("        process: 'readonly',\n        console: 'readonly',\n")],
            ),
            lit("      },\n    },\n    rules: {\n      'no-unused-vars': 'warn',\n    },\n  },\n];\n"),
        ],
    }
}

pub fn c8rc() -> Template {
    Template {
        id: "c8rc",
        body: vec![lit(
            "{\n  \"all\": true,\n  \"include\": [\"src/**\"],\n  \"reporter\": [\"text\", \"lcov\"]\n}\n",
        )],
    }
}

pub fn release_it() -> Template {
    Template {
        id: "release-it",
        body: vec![
            lit("{\n  \"git\": {\n    \"tagName\": \"v${version}\",\n    \"commitMessage\": \"release v${version}\"\n  }"),
            when(
                Cond::CiIs(CiProvider::Github),
                vec![lit(",\n  \"github\": {\n    \"release\": true\n  }")],
            ),
            lit("\n}\n"),
        ],
    }
}
