//! README, license and changelog templates.

use packsmith_config::Bundler;

use crate::fragment::{either, field, lit, not, when, Cond, Field, Template};

pub fn readme() -> Template {
    Template {
        id: "readme",
        body: vec![
            lit("# "),
            field(Field::PackageName),
            lit("\n\n"),
            field(Field::Description),
            lit("\n\n## Install\n\n```sh\nnpm install "),
            field(Field::PackageName),
            lit("\n```\n"),
            when(
                Cond::Cli,
                vec![
                    lit("\n## Usage\n\n```sh\nnpx "),
                    field(Field::CleanName),
                    lit("\n```\n"),
                ],
            ),
            when(
                Cond::ManualTests,
                vec![lit(
                    "\n## Demo\n\nOpen `demo/index.html` in a browser to try the module manually.\n",
                )],
            ),
            lit("\n## Development\n\n```sh\nnpm install\n"),
            when(not(Cond::BundlerIs(Bundler::None)), vec![lit("npm run build\n")]),
            when(Cond::AutomatedTests, vec![lit("npm test\n")]),
            lit("npm run lint\n```\n"),
            when(
                Cond::Scoped,
                vec![lit(
                    "\n## Publishing\n\nScoped packages publish privately by default:\n\n```sh\nnpm publish --access public\n```\n",
                )],
            ),
            lit("\n## License\n\n"),
            field(Field::License),
            lit(" © "),
            field(Field::Year),
            when(Cond::HasAuthor, vec![lit(" "), field(Field::Author)]),
            lit("\n"),
        ],
    }
}

pub fn license() -> Template {
    Template {
        id: "license",
        body: vec![either(
            Cond::LicenseIs("MIT"),
            vec![
                lit("MIT License\n\nCopyright (c) "),
                field(Field::Year),
                lit(" "),
                field(Field::Author),
                lit(
                    "\n\nPermission is hereby granted, free of charge, to any person obtaining a copy\n\
                     of this software and associated documentation files (the \"Software\"), to deal\n\
                     in the Software without restriction, including without limitation the rights\n\
                     to use, copy, modify, merge, publish, distribute, sublicense, and/or sell\n\
                     copies of the Software, and to permit persons to whom the Software is\n\
                     furnished to do so, subject to the following conditions:\n\n\
                     The above copyright notice and this permission notice shall be included in all\n\
                     copies or substantial portions of the Software.\n\n\
                     THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR\n\
                     IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,\n\
                     FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE\n\
                     AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER\n\
                     LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,\n\
                     OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE\n\
                     SOFTWARE.\n",
                ),
            ],
            vec![
                lit("Copyright (c) "),
                field(Field::Year),
                lit(" "),
                field(Field::Author),
                lit("\n\nLicensed under the "),
                field(Field::License),
                lit(" license.\n"),
            ],
        )],
    }
}

pub fn changelog() -> Template {
    Template {
        id: "changelog",
        body: vec![
            lit("# Changelog\n\nAll notable changes to "),
            field(Field::PackageName),
            lit(" are documented in this file.\n\n## [Unreleased]\n\n- Initial scaffold.\n"),
        ],
    }
}
