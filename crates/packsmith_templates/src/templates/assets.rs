//! Static assets copied verbatim into every generated package.

pub const EDITORCONFIG: &str = "\
root = true

[*]
charset = utf-8
indent_style = space
indent_size = 2
end_of_line = lf
insert_final_newline = true
trim_trailing_whitespace = true

[*.md]
trim_trailing_whitespace = false
";

pub const GITATTRIBUTES: &str = "* text=auto eol=lf\n";
