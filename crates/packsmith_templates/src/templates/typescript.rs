//! TypeScript and checked-JavaScript compiler configuration.

use crate::fragment::{field, lit, Field, Template};

pub fn tsconfig() -> Template {
    Template {
        id: "tsconfig",
        body: vec![
            lit("{\n  \"compilerOptions\": {\n    \"target\": \""),
            field(Field::CompileTarget),
            lit("\",\n    \"module\": \"NodeNext\",\n    \"moduleResolution\": \"NodeNext\",\n    \"strict\": true,\n    \"declaration\": true,\n    \"outDir\": \"dist\",\n    \"skipLibCheck\": true\n  },\n  \"include\": [\"src\"]\n}\n"),
        ],
    }
}

pub fn tsconfig_build() -> Template {
    Template {
        id: "tsconfig-build",
        body: vec![lit(
            "{\n  \"extends\": \"./tsconfig.json\",\n  \"compilerOptions\": {\n    \"emitDeclarationOnly\": true\n  }\n}\n",
        )],
    }
}

/// JSDoc-typed JavaScript: the compiler checks but never emits.
pub fn jsconfig() -> Template {
    Template {
        id: "jsconfig",
        body: vec![
            lit("{\n  \"compilerOptions\": {\n    \"target\": \""),
            field(Field::CompileTarget),
            lit("\",\n    \"module\": \"NodeNext\",\n    \"moduleResolution\": \"NodeNext\",\n    \"checkJs\": true,\n    \"noEmit\": true\n  },\n  \"include\": [\"src\"]\n}\n"),
        ],
    }
}
