//! CI pipeline templates.

use packsmith_config::{Bundler, TypescriptMode};

use crate::fragment::{field, lit, not, when, Cond, Field, Template};

pub fn github_workflow() -> Template {
    Template {
        id: "ci-github",
        body: vec![
            lit("name: ci\n\non:\n  push:\n    branches: [main]\n  pull_request:\n\njobs:\n  check:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n      - uses: actions/setup-node@v4\n        with:\n          node-version: "),
            field(Field::NodeMajor),
            lit("\n          cache: npm\n      - run: npm ci\n      - run: npm run lint\n"),
            when(
                Cond::Ts(TypescriptMode::Full),
                vec![lit("      - run: npm run lint:types\n")],
            ),
            when(
                not(Cond::BundlerIs(Bundler::None)),
                vec![lit("      - run: npm run build\n")],
            ),
            when(Cond::AutomatedTests, vec![lit("      - run: npm test\n")]),
        ],
    }
}

pub fn gitlab_pipeline() -> Template {
    Template {
        id: "ci-gitlab",
        body: vec![
            lit("image: node:"),
            field(Field::NodeMajor),
            lit("\n\nstages:\n  - check\n\ncheck:\n  stage: check\n  script:\n    - npm ci\n    - npm run lint\n"),
            when(
                Cond::Ts(TypescriptMode::Full),
                vec![lit("    - npm run lint:types\n")],
            ),
            when(
                not(Cond::BundlerIs(Bundler::None)),
                vec![lit("    - npm run build\n")],
            ),
            when(Cond::AutomatedTests, vec![lit("    - npm test\n")]),
        ],
    }
}
