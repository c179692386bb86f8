//! esbuild driver script.

use packsmith_config::Bundler;

use crate::fragment::{either, expr, field, lit, Cond, Expr, Field, Template};

pub fn build_script() -> Template {
    Template {
        id: "build-script",
        body: vec![
            lit("import { build } from 'esbuild';\n\nawait build({\n  entryPoints: ['"),
            field(Field::EntryFile),
            lit("'],\n  bundle: true,\n  format: 'esm',\n  outfile: 'dist/index.js',\n"),
            either(
                Cond::BundlerIs(Bundler::Browser),
                vec![
                    lit("  platform: 'browser',\n  target: "),
                    expr(Expr::BundlerTargetsJson),
                    lit(",\n"),
                ],
                vec![
                    lit("  platform: 'node',\n  target: ['"),
                    field(Field::EsbuildNodeTarget),
                    lit("'],\n"),
                ],
            ),
            lit("  sourcemap: true,\n});\n"),
        ],
    }
}
