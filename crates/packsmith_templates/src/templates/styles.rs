//! Stylesheets and the manual-test demo page.

use packsmith_config::ModuleKind;

use crate::fragment::{either, field, lit, when, Cond, Field, Template};

pub fn styles_sass() -> Template {
    Template {
        id: "styles-sass",
        body: vec![
            lit("$accent: #1f6feb;\n\n."),
            field(Field::CleanName),
            lit(" {\n  color: $accent;\n  font-family: sans-serif;\n\n  &:hover {\n    text-decoration: underline;\n  }\n}\n"),
        ],
    }
}

pub fn styles_css() -> Template {
    Template {
        id: "styles-css",
        body: vec![
            lit("."),
            field(Field::CleanName),
            lit(" {\n  color: #1f6feb;\n  font-family: sans-serif;\n}\n\n."),
            field(Field::CleanName),
            lit(":hover {\n  text-decoration: underline;\n}\n"),
        ],
    }
}

/// Static page for exercising the module in a real browser by hand.
pub fn demo_html() -> Template {
    Template {
        id: "demo-html",
        body: vec![
            lit("<!doctype html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\" />\n    <title>"),
            field(Field::PackageName),
            lit(" demo</title>\n"),
            when(
                Cond::Kind(ModuleKind::Css),
                vec![lit("    <link rel=\"stylesheet\" href=\"../src/styles.css\" />\n")],
            ),
            lit("  </head>\n  <body>\n    <h1>"),
            field(Field::PackageName),
            lit("</h1>\n    <script type=\"module\">\n"),
            either(
                Cond::Kind(ModuleKind::VanillaWidget),
                vec![lit(
                    "      import { init } from '../src/index.js';\n\n      init();\n",
                )],
                vec![lit(
                    "      import { greet } from '../src/index.js';\n\n      document.body.insertAdjacentText('beforeend', greet());\n",
                )],
            ),
            lit("    </script>\n  </body>\n</html>\n"),
        ],
    }
}
