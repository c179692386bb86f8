//! Source entry-point templates.

use packsmith_config::TypescriptMode;

use crate::fragment::{field, lit, when, Cond, Field, Template};

pub fn entry_js() -> Template {
    Template {
        id: "entry-js",
        body: vec![
            lit("/**\n * "),
            field(Field::PackageName),
            lit("\n */\n\n"),
            when(
                Cond::Ts(TypescriptMode::Comments),
                vec![lit("/**\n * @param {string} [name]\n * @returns {string}\n */\n")],
            ),
            lit("export function greet(name = 'world') {\n  return `"),
            field(Field::CleanName),
            lit(": hello, ${name}`;\n}\n"),
        ],
    }
}

pub fn entry_ts() -> Template {
    Template {
        id: "entry-ts",
        body: vec![
            lit("/**\n * "),
            field(Field::PackageName),
            lit("\n */\n\nexport function greet(name = 'world'): string {\n  return `"),
            field(Field::CleanName),
            lit(": hello, ${name}`;\n}\n"),
        ],
    }
}

/// Vanilla widget entry: attaches an element to the document.
pub fn entry_widget() -> Template {
    Template {
        id: "entry-widget",
        body: vec![
            lit("/**\n * "),
            field(Field::PackageName),
            lit("\n */\n\nexport function init(root = document.body) {\n  const element = document.createElement('div');\n  element.className = '"),
            field(Field::CleanName),
            lit("';\n  element.textContent = '"),
            field(Field::CleanName),
            lit("';\n  root.appendChild(element);\n  return element;\n}\n"),
        ],
    }
}

pub fn cli_js() -> Template {
    Template {
        id: "cli-js",
        body: vec![
            lit("#!/usr/bin/env node\nimport { greet } from './index.js';\n\nconsole.log(greet(process.argv[2]));\n"),
        ],
    }
}

pub fn cli_ts() -> Template {
    Template {
        id: "cli-ts",
        body: vec![
            lit("#!/usr/bin/env node\nimport { greet } from './index.js';\n\nconsole.log(greet(process.argv[2]));\n"),
        ],
    }
}
