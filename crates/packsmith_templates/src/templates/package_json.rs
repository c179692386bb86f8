//! The package descriptor template.
//!
//! The trickiest template in the set: scripts and devDependencies are almost
//! entirely conditional. Every conditional JSON line ends with a trailing
//! comma and each object closes with one unconditional line, so the output
//! is valid JSON for every configuration.

use packsmith_config::{Bundler, ModuleKind, TypescriptMode};

use crate::fragment::{all, either, field, lit, not, when, Cond, Field, Fragment, Template};

pub fn package_json() -> Template {
    let mut body = vec![
        lit("{\n  \"name\": \""),
        field(Field::PackageName),
        lit("\",\n  \"version\": \"1.0.0\",\n  \"description\": \""),
        field(Field::Description),
        lit("\",\n  \"license\": \""),
        field(Field::License),
        lit("\",\n"),
        when(
            Cond::HasAuthor,
            vec![lit("  \"author\": \""), field(Field::Author), lit("\",\n")],
        ),
        lit("  \"type\": \"module\",\n  \"main\": \""),
        field(Field::MainFile),
        lit("\",\n"),
        when(
            Cond::Ts(TypescriptMode::Full),
            vec![lit("  \"types\": \"dist/index.d.ts\",\n")],
        ),
        when(
            Cond::Cli,
            vec![
                lit("  \"bin\": {\n    \""),
                field(Field::CleanName),
                lit("\": \""),
                field(Field::BinFile),
                lit("\"\n  },\n"),
            ],
        ),
        either(
            Cond::BundlerIs(Bundler::None),
            vec![lit("  \"files\": [\n    \"src\"\n  ],\n")],
            vec![lit("  \"files\": [\n    \"dist\",\n    \"src\"\n  ],\n")],
        ),
        lit("  \"scripts\": {\n"),
    ];

    body.extend(scripts());
    body.push(lit("    \"lint\": \"eslint .\"\n  },\n"));
    body.push(lit("  \"engines\": {\n    \"node\": \""));
    body.push(field(Field::NodeEngines));
    body.push(lit("\"\n  },\n"));
    body.push(lit("  \"devDependencies\": {\n"));
    body.extend(dev_dependencies());
    body.push(lit("    \"eslint\": \"^9.0.0\"\n  }\n}\n"));

    Template { id: "package-json", body }
}

fn scripts() -> Vec<Fragment> {
    vec![
        when(
            not(Cond::BundlerIs(Bundler::None)),
            vec![either(
                Cond::BundlerIs(Bundler::NodeDeclarations),
                vec![lit(
                    "    \"build\": \"node build.mjs && tsc -p tsconfig.build.json --emitDeclarationOnly\",\n",
                )],
                vec![lit("    \"build\": \"node build.mjs\",\n")],
            )],
        ),
        when(
            Cond::AutomatedTests,
            vec![either(
                Cond::BrowserModule,
                vec![lit("    \"test\": \"karma start karma.conf.js\",\n")],
                vec![
                    either(
                        Cond::Coverage,
                        vec![lit("    \"test\": \"c8 mocha")],
                        vec![lit("    \"test\": \"mocha")],
                    ),
                    either(
                        Cond::Ts(TypescriptMode::Full),
                        vec![lit(" --import tsx test/\",\n")],
                        vec![lit(" test/\",\n")],
                    ),
                ],
            )],
        ),
        when(
            Cond::IntegrationTests,
            vec![lit("    \"test:cloud\": \"karma start karma.cloud.conf.js\",\n")],
        ),
        when(
            Cond::Ts(TypescriptMode::Full),
            vec![lit("    \"lint:types\": \"tsc -p tsconfig.json --noEmit\",\n")],
        ),
        when(Cond::Changelog, vec![lit("    \"release\": \"release-it\",\n")]),
    ]
}

fn dev_dependencies() -> Vec<Fragment> {
    vec![
        when(
            all(vec![Cond::AutomatedTests, not(Cond::BrowserModule)]),
            vec![lit("    \"mocha\": \"^10.4.0\",\n")],
        ),
        when(
            all(vec![Cond::AutomatedTests, not(Cond::BrowserModule), Cond::Coverage]),
            vec![lit("    \"c8\": \"^9.1.0\",\n")],
        ),
        when(
            all(vec![
                Cond::AutomatedTests,
                not(Cond::BrowserModule),
                Cond::Ts(TypescriptMode::Full),
            ]),
            vec![lit("    \"tsx\": \"^4.7.0\",\n")],
        ),
        when(
            all(vec![Cond::BrowserModule, Cond::AutomatedTests]),
            vec![lit(
                "    \"karma\": \"^6.4.3\",\n    \"karma-chrome-launcher\": \"^3.2.0\",\n    \"karma-mocha\": \"^2.0.1\",\n    \"mocha\": \"^10.4.0\",\n    \"puppeteer\": \"^22.6.0\",\n",
            )],
        ),
        when(
            all(vec![Cond::BrowserModule, Cond::AutomatedTests, Cond::Coverage]),
            vec![lit("    \"karma-coverage\": \"^2.2.1\",\n")],
        ),
        when(
            Cond::IntegrationTests,
            vec![lit(
                "    \"karma-sauce-launcher\": \"^4.3.6\",\n    \"karma-browserstack-launcher\": \"^1.6.0\",\n",
            )],
        ),
        when(
            not(Cond::BundlerIs(Bundler::None)),
            vec![lit("    \"esbuild\": \"^0.20.2\",\n")],
        ),
        when(Cond::Typescript, vec![lit("    \"typescript\": \"^5.4.5\",\n")]),
        when(Cond::Kind(ModuleKind::Sass), vec![lit("    \"sass\": \"^1.75.0\",\n")]),
        when(Cond::Changelog, vec![lit("    \"release-it\": \"^17.2.0\",\n")]),
    ]
}
