//! Test specs and Karma configuration.

use packsmith_config::ModuleKind;

use crate::fragment::{either, expr, field, lit, when, Cond, Expr, Field, Template};

pub fn test_node() -> Template {
    Template {
        id: "test-node",
        body: vec![
            lit("import assert from 'node:assert/strict';\nimport { greet } from '../src/index.js';\n\ndescribe('"),
            field(Field::PackageName),
            lit("', () => {\n  it('greets the world by default', () => {\n    assert.equal(greet(), '"),
            field(Field::CleanName),
            lit(": hello, world');\n  });\n\n  it('greets a caller-supplied name', () => {\n    assert.equal(greet('mocha'), '"),
            field(Field::CleanName),
            lit(": hello, mocha');\n  });\n});\n"),
        ],
    }
}

pub fn test_browser() -> Template {
    Template {
        id: "test-browser",
        body: vec![
            either(
                Cond::Kind(ModuleKind::VanillaWidget),
                vec![
                    lit("import { init } from '../src/index.js';\n\ndescribe('"),
                    field(Field::PackageName),
                    lit("', () => {\n  afterEach(() => {\n    document.body.innerHTML = '';\n  });\n\n  it('attaches the widget to the document', () => {\n    const element = init();\n    if (!document.body.contains(element)) {\n      throw new Error('widget was not attached');\n    }\n  });\n});\n"),
                ],
                vec![
                    lit("import { greet } from '../src/index.js';\n\ndescribe('"),
                    field(Field::PackageName),
                    lit("', () => {\n  it('greets the world by default', () => {\n    if (greet() !== '"),
                    field(Field::CleanName),
                    lit(": hello, world') {\n      throw new Error('unexpected greeting');\n    }\n  });\n});\n"),
                ],
            ),
        ],
    }
}

pub fn test_integration() -> Template {
    Template {
        id: "test-integration",
        body: vec![
            lit("import { greet } from '../src/index.js';\n\ndescribe('"),
            field(Field::PackageName),
            lit(" (cloud grid)', () => {\n  it('works in this browser', () => {\n    if (typeof greet() !== 'string') {\n      throw new Error('module did not load');\n    }\n  });\n});\n"),
        ],
    }
}

/// Local Karma run against headless Chrome supplied by Puppeteer.
pub fn karma_conf() -> Template {
    Template {
        id: "karma-conf",
        body: vec![
            lit("import puppeteer from 'puppeteer';\n\nprocess.env.CHROME_BIN = puppeteer.executablePath();\n\nexport default function (config) {\n  config.set({\n    frameworks: ['mocha'],\n    files: [\n      { pattern: 'src/**/*.js', type: 'module' },\n      { pattern: 'test/**/*.spec.js', type: 'module' },\n    ],\n    browsers: ['ChromeHeadless'],\n"),
            when(
                Cond::Coverage,
                vec![lit("    preprocessors: {\n      'src/**/*.js': ['coverage'],\n    },\n    reporters: ['progress', 'coverage'],\n    coverageReporter: {\n      type: 'lcov',\n      dir: 'coverage/',\n    },\n"),
                ],
            ),
            lit("    singleRun: true,\n  });\n}\n"),
        ],
    }
}

/// Cloud Karma run. The launcher maps are derived from the browser support
/// declaration, so the grid follows `.browserslistrc` automatically.
pub fn karma_cloud() -> Template {
    Template {
        id: "karma-cloud",
        body: vec![
            lit("const sauceLaunchers = "),
            expr(Expr::SauceLaunchersJson),
            lit(";\n\nconst browserStackLaunchers = "),
            expr(Expr::BrowserStackLaunchersJson),
            lit(";\n\nexport default function (config) {\n  config.set({\n    frameworks: ['mocha'],\n    files: [\n      { pattern: 'src/**/*.js', type: 'module' },\n      { pattern: 'test/**/*.integration.js', type: 'module' },\n    ],\n    customLaunchers: {\n      ...sauceLaunchers,\n      ...browserStackLaunchers,\n    },\n    browsers: [\n      ...Object.keys(sauceLaunchers),\n      ...Object.keys(browserStackLaunchers),\n    ],\n    sauceLabs: {\n      testName: '"),
            field(Field::PackageName),
            lit("',\n    },\n    browserStack: {\n      project: '"),
            field(Field::PackageName),
            lit("',\n    },\n    concurrency: 2,\n    singleRun: true,\n  });\n}\n"),
        ],
    }
}
