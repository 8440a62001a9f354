//! Built-in language table.

use super::{Category, CommentSyntax, Language, MultiLineComment, StringDelimiter, StringSyntax};

pub fn languages() -> Vec<Language> {
    let mut all = common();
    all.extend(common_jvm_and_mobile());
    all.extend(web());
    all.extend(templates());
    all.extend(systems());
    all.extend(scripting());
    all.extend(database());
    all.extend(legacy());
    all.extend(functional());
    all.extend(scientific());
    all.extend(markup());
    all.extend(config());
    all.extend(domain());
    all
}

fn c_style() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
}

fn c_nested() -> CommentSyntax {
    CommentSyntax::with_multi_line(
        vec!["//"],
        vec![MultiLineComment::new("/*", "*/").with_nesting()],
    )
}

fn line(markers: Vec<&str>) -> CommentSyntax {
    CommentSyntax::new(markers, Vec::new())
}

fn block(start: &str, end: &str) -> CommentSyntax {
    CommentSyntax::new(Vec::new(), vec![(start, end)])
}

fn nested(single_line: Vec<&str>, start: &str, end: &str) -> CommentSyntax {
    CommentSyntax::with_multi_line(
        single_line,
        vec![MultiLineComment::new(start, end).with_nesting()],
    )
}

fn quote(delimiter: &str) -> StringDelimiter {
    StringDelimiter::quote(delimiter)
}

/// `"` strings and `'x'` character literals with backslash escapes.
fn c_strings() -> StringSyntax {
    StringSyntax::new(
        vec![quote("\""), StringDelimiter::char_literal("'")],
        Some('\\'),
    )
}

fn strings(delimiters: Vec<StringDelimiter>) -> StringSyntax {
    StringSyntax::new(delimiters, Some('\\'))
}

fn common() -> Vec<Language> {
    vec![
        Language::new(
            "Python",
            Category::Common,
            vec!["py", "pyw", "pyi"],
            line(vec!["#"]).with_docstrings(vec!["\"\"\"", "'''"]),
        )
        .with_interpreters(vec!["python"])
        .indent_based(),
        Language::new("JavaScript", Category::Common, vec!["js", "mjs", "cjs", "jsx"], c_style())
            .with_strings(strings(vec![quote("\""), quote("'"), quote("`").multiline()]))
            .with_interpreters(vec!["node"]),
        Language::new("TypeScript", Category::Common, vec!["ts", "tsx", "mts", "cts"], c_style())
            .with_strings(strings(vec![quote("\""), quote("'"), quote("`").multiline()]))
            .with_interpreters(vec!["ts-node", "deno"]),
        Language::new("Java", Category::Common, vec!["java"], c_style()).with_strings(strings(
            vec![
                quote("\"\"\"").multiline(),
                quote("\""),
                StringDelimiter::char_literal("'"),
            ],
        )),
        Language::new("C", Category::Common, vec!["c", "h"], c_style()).with_strings(c_strings()),
        Language::new(
            "C++",
            Category::Common,
            vec!["cpp", "cc", "cxx", "c++", "hpp", "hxx", "hh"],
            c_style(),
        )
        .with_strings(c_strings()),
        Language::new("C#", Category::Common, vec!["cs", "csx"], c_style())
            .with_strings(c_strings()),
        Language::new("Go", Category::Common, vec!["go"], c_style()).with_strings(strings(vec![
            quote("\""),
            StringDelimiter::char_literal("'"),
            quote("`").multiline().raw(),
        ])),
        Language::new(
            "Rust",
            Category::Common,
            vec!["rs"],
            CommentSyntax::with_multi_line(
                vec!["//", "///", "//!"],
                vec![MultiLineComment::new("/*", "*/").with_nesting()],
            ),
        )
        .with_strings(
            strings(vec![quote("\"").multiline(), StringDelimiter::char_literal("'")])
                .with_rust_raw_strings(),
        ),
        Language::new(
            "Ruby",
            Category::Common,
            vec!["rb", "rake", "gemspec"],
            CommentSyntax::with_multi_line(
                vec!["#"],
                vec![MultiLineComment::new("=begin", "=end").at_line_start()],
            ),
        )
        .with_filenames(vec!["Rakefile", "Gemfile", "Guardfile", "Vagrantfile"])
        .with_interpreters(vec!["ruby"]),
        Language::new(
            "PHP",
            Category::Common,
            vec!["php", "phtml"],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]),
        )
        .with_interpreters(vec!["php"]),
    ]
}

fn common_jvm_and_mobile() -> Vec<Language> {
    let triple_quoted = |char_literal: bool| {
        let mut delimiters = vec![quote("\"\"\"").multiline().raw(), quote("\"")];
        if char_literal {
            delimiters.push(StringDelimiter::char_literal("'"));
        }
        strings(delimiters)
    };

    vec![
        Language::new("Swift", Category::Common, vec!["swift"], c_nested())
            .with_strings(triple_quoted(false)),
        Language::new("Kotlin", Category::Common, vec!["kt", "kts"], c_nested())
            .with_strings(triple_quoted(true)),
        Language::new("Scala", Category::Common, vec!["scala", "sc"], c_nested())
            .with_strings(triple_quoted(true))
            .with_interpreters(vec!["scala"]),
        Language::new("Dart", Category::Common, vec!["dart"], c_nested()).with_strings(strings(
            vec![
                quote("\"\"\"").multiline(),
                quote("'''").multiline(),
                quote("\""),
                quote("'"),
            ],
        )),
    ]
}

fn web() -> Vec<Language> {
    let html_comment = || block("<!--", "-->");
    let component = || {
        CommentSyntax::new(vec!["//"], vec![("/*", "*/"), ("<!--", "-->")])
    };

    vec![
        Language::new("HTML", Category::Web, vec!["html", "htm", "xhtml"], html_comment())
            .with_strings(StringSyntax::none()),
        Language::new("CSS", Category::Web, vec!["css"], block("/*", "*/")),
        Language::new("SCSS", Category::Web, vec!["scss"], c_style()),
        Language::new("Less", Category::Web, vec!["less"], c_style()),
        Language::new("Vue", Category::Web, vec!["vue"], component()),
        Language::new("Svelte", Category::Web, vec!["svelte"], component()),
        Language::new("XAML", Category::Web, vec!["xaml"], html_comment())
            .with_strings(StringSyntax::none()),
        Language::new("QML", Category::Web, vec!["qml"], c_style()),
        Language::new("HAML", Category::Web, vec!["haml"], line(vec!["-#"])),
        Language::new("Slim", Category::Web, vec!["slim"], line(vec!["/"])),
        Language::new("Pug", Category::Web, vec!["pug", "jade"], line(vec!["//-", "//"])),
    ]
}

fn templates() -> Vec<Language> {
    let template = |name: &str, extensions: Vec<&str>, comments: CommentSyntax| {
        Language::new(name, Category::Web, extensions, comments).with_strings(StringSyntax::none())
    };

    vec![
        template(
            "Handlebars",
            vec!["hbs", "handlebars"],
            CommentSyntax::new(Vec::new(), vec![("{{!--", "--}}"), ("{{!", "}}")]),
        ),
        template("Mustache", vec!["mustache"], block("{{!", "}}")),
        template("Jinja2", vec!["j2", "jinja", "jinja2"], block("{#", "#}")),
        template(
            "Liquid",
            vec!["liquid"],
            block("{% comment %}", "{% endcomment %}"),
        ),
        template("Smarty", vec!["tpl"], block("{*", "*}")),
        template("Twig", vec!["twig"], block("{#", "#}")),
        template(
            "ERB",
            vec!["erb"],
            CommentSyntax::new(Vec::new(), vec![("<%#", "%>"), ("<!--", "-->")]),
        ),
    ]
}

fn systems() -> Vec<Language> {
    vec![
        Language::new("Assembly", Category::Systems, vec!["asm", "s", "nasm"], line(vec![";"]))
            .with_strings(c_strings()),
        Language::new("Zig", Category::Systems, vec!["zig"], line(vec!["//"]))
            .with_strings(c_strings()),
        Language::new("Nim", Category::Systems, vec!["nim", "nims"], nested(vec!["#"], "#[", "]#"))
            .with_strings(strings(vec![
                quote("\"\"\"").multiline().raw(),
                quote("\""),
                StringDelimiter::char_literal("'"),
            ]))
            .with_interpreters(vec!["nim"])
            .indent_based(),
        Language::new("Crystal", Category::Systems, vec!["cr"], line(vec!["#"]))
            .with_strings(c_strings())
            .with_interpreters(vec!["crystal"]),
        Language::new(
            "D",
            Category::Systems,
            vec!["d", "di"],
            CommentSyntax::with_multi_line(
                vec!["//"],
                vec![
                    MultiLineComment::new("/*", "*/"),
                    MultiLineComment::new("/+", "+/").with_nesting(),
                ],
            ),
        )
        .with_strings(strings(vec![
            quote("\"").multiline(),
            quote("`").multiline().raw(),
            StringDelimiter::char_literal("'"),
        ])),
    ]
}

fn scripting() -> Vec<Language> {
    let shell_strings = || strings(vec![quote("\""), quote("'").raw()]);

    vec![
        Language::new(
            "Shell",
            Category::Scripting,
            vec!["sh", "bash", "zsh", "ksh", "fish"],
            line(vec!["#"]),
        )
        .with_strings(shell_strings())
        .with_filenames(vec![".bashrc", ".bash_profile", ".zshrc", ".profile"])
        .with_interpreters(vec!["sh", "bash", "zsh", "ksh", "dash", "fish"]),
        Language::new(
            "PowerShell",
            Category::Scripting,
            vec!["ps1", "psm1", "psd1"],
            CommentSyntax::new(vec!["#"], vec![("<#", "#>")]),
        )
        .with_strings(StringSyntax::new(vec![quote("\""), quote("'").raw()], Some('`')))
        .with_interpreters(vec!["pwsh"]),
        Language::new(
            "Perl",
            Category::Scripting,
            vec!["pl", "pm"],
            CommentSyntax::with_multi_line(
                vec!["#"],
                ["=pod", "=head1", "=head2", "=head3", "=begin", "=item", "=over"]
                    .into_iter()
                    .map(|start| MultiLineComment::new(start, "=cut").at_line_start())
                    .collect(),
            ),
        )
        .with_interpreters(vec!["perl"]),
        Language::new(
            "Lua",
            Category::Scripting,
            vec!["lua"],
            CommentSyntax::with_multi_line(vec!["--"], vec![MultiLineComment::lua_long_bracket()]),
        )
        .with_strings(strings(vec![
            quote("\""),
            quote("'"),
            StringDelimiter::pair("[[", "]]").multiline().raw(),
        ]))
        .with_interpreters(vec!["lua", "luajit"]),
        Language::new("TCL", Category::Scripting, vec!["tcl"], line(vec!["#"]))
            .with_strings(StringSyntax::double_only())
            .with_interpreters(vec!["tclsh", "wish"]),
        Language::new("REXX", Category::Scripting, vec!["rexx", "rex"], block("/*", "*/"))
            .with_strings(StringSyntax::default().without_escape()),
        Language::new("Groovy", Category::Scripting, vec!["groovy", "gvy", "gradle"], c_style())
            .with_strings(strings(vec![
                quote("\"\"\"").multiline(),
                quote("'''").multiline(),
                quote("\""),
                quote("'"),
            ]))
            .with_interpreters(vec!["groovy"]),
        Language::new("AWK", Category::Scripting, vec!["awk"], line(vec!["#"]))
            .with_strings(StringSyntax::double_only())
            .with_interpreters(vec!["awk", "gawk"]),
    ]
}

fn database() -> Vec<Language> {
    let sql = || CommentSyntax::new(vec!["--"], vec![("/*", "*/")]);
    let sql_strings = || StringSyntax::default().without_escape();

    vec![
        Language::new("SQL", Category::Database, vec!["sql"], sql()).with_strings(sql_strings()),
        Language::new("PLSQL", Category::Database, vec!["pls", "pks", "pkb", "plsql"], sql())
            .with_strings(sql_strings()),
        Language::new(
            "CQL",
            Category::Database,
            vec!["cql"],
            CommentSyntax::new(vec!["--", "//"], vec![("/*", "*/")]),
        )
        .with_strings(sql_strings()),
        Language::new("HiveQL", Category::Database, vec!["hql", "q"], line(vec!["--"])),
        Language::new("Cypher", Category::Database, vec!["cypher", "cyp"], c_style()),
    ]
}

fn legacy() -> Vec<Language> {
    let no_escape = || StringSyntax::default().without_escape();
    let single_quoted = || StringSyntax::new(vec![quote("'")], None);
    let pascal_comments = || CommentSyntax::new(vec!["//"], vec![("{", "}"), ("(*", "*)")]);

    vec![
        Language::new("COBOL", Category::Legacy, vec!["cob", "cbl", "cpy"], line(vec!["*>", "*"]))
            .with_strings(no_escape()),
        Language::new(
            "Fortran",
            Category::Legacy,
            vec!["f", "f90", "f95", "f03", "f08", "for"],
            line(vec!["!"]),
        )
        .with_strings(no_escape()),
        Language::new(
            "Pascal",
            Category::Legacy,
            vec!["pas", "pp", "dpr", "lpr"],
            pascal_comments(),
        )
        .with_strings(single_quoted()),
        Language::new("Ada", Category::Legacy, vec!["ada", "adb", "ads"], line(vec!["--"]))
            .with_strings(StringSyntax::new(
                vec![quote("\""), StringDelimiter::char_literal("'")],
                None,
            )),
        Language::new(
            "Modula-2",
            Category::Legacy,
            vec!["mod", "def"],
            nested(Vec::new(), "(*", "*)"),
        )
        .with_strings(no_escape()),
        Language::new(
            "Modula-3",
            Category::Legacy,
            vec!["m3", "i3", "mg", "ig"],
            nested(Vec::new(), "(*", "*)"),
        )
        .with_strings(no_escape()),
        Language::new(
            "Oberon",
            Category::Legacy,
            vec!["ob", "ob2", "obn"],
            nested(Vec::new(), "(*", "*)"),
        )
        .with_strings(no_escape()),
        Language::new("PLI", Category::Legacy, vec!["pli", "pl1"], block("/*", "*/"))
            .with_strings(no_escape()),
        Language::new(
            "RPG",
            Category::Legacy,
            vec!["rpg", "rpgle", "sqlrpgle"],
            line(vec!["//", "*"]),
        )
        .with_strings(single_quoted()),
        Language::new("JCL", Category::Legacy, vec!["jcl"], line(vec!["//*"]))
            .with_strings(single_quoted()),
        Language::new("BASIC", Category::Legacy, vec!["bas"], line(vec!["'", "REM "]))
            .with_strings(StringSyntax::new(vec![quote("\"")], None)),
        Language::new("Visual Basic", Category::Legacy, vec!["vb", "vbs"], line(vec!["'"]))
            .with_strings(StringSyntax::new(vec![quote("\"")], None)),
    ]
}

fn functional() -> Vec<Language> {
    let lisp = || nested(vec![";"], "#|", "|#");

    vec![
        Language::new(
            "Haskell",
            Category::Functional,
            vec!["hs", "lhs"],
            nested(vec!["--"], "{-", "-}"),
        )
        .with_strings(c_strings())
        .with_interpreters(vec!["runhaskell"]),
        Language::new("Elixir", Category::Functional, vec!["ex", "exs"], line(vec!["#"]))
            .with_strings(strings(vec![
                quote("\"\"\"").multiline(),
                quote("'''").multiline(),
                quote("\""),
                quote("'"),
            ]))
            .with_interpreters(vec!["elixir"]),
        Language::new("Erlang", Category::Functional, vec!["erl", "hrl"], line(vec!["%"]))
            .with_interpreters(vec!["escript"]),
        Language::new(
            "Clojure",
            Category::Functional,
            vec!["clj", "cljs", "cljc", "edn"],
            line(vec![";"]),
        )
        .with_strings(StringSyntax::double_only()),
        Language::new("Lisp", Category::Functional, vec!["lisp", "lsp", "cl", "el"], lisp())
            .with_strings(StringSyntax::double_only())
            .with_interpreters(vec!["sbcl"]),
        Language::new("Scheme", Category::Functional, vec!["scm", "ss", "rkt"], lisp())
            .with_strings(StringSyntax::double_only())
            .with_interpreters(vec!["guile", "racket"]),
        Language::new(
            "OCaml",
            Category::Functional,
            vec!["ml", "mli"],
            nested(Vec::new(), "(*", "*)"),
        )
        .with_strings(c_strings())
        .with_interpreters(vec!["ocaml"]),
        Language::new(
            "F#",
            Category::Functional,
            vec!["fs", "fsi", "fsx"],
            CommentSyntax::new(vec!["//"], vec![("(*", "*)")]),
        )
        .with_strings(strings(vec![
            quote("\"\"\"").multiline().raw(),
            quote("\""),
            StringDelimiter::char_literal("'"),
        ])),
        Language::new("Elm", Category::Functional, vec!["elm"], nested(vec!["--"], "{-", "-}"))
            .with_strings(strings(vec![
                quote("\"\"\"").multiline(),
                quote("\""),
                StringDelimiter::char_literal("'"),
            ])),
    ]
}

fn scientific() -> Vec<Language> {
    vec![
        Language::new("R", Category::Scientific, vec!["r", "rmd"], line(vec!["#"]))
            .with_interpreters(vec!["Rscript"]),
        Language::new("Julia", Category::Scientific, vec!["jl"], nested(vec!["#"], "#=", "=#"))
            .with_strings(strings(vec![
                quote("\"\"\"").multiline(),
                quote("\""),
                StringDelimiter::char_literal("'"),
            ]))
            .with_interpreters(vec!["julia"]),
        Language::new(
            "MATLAB",
            Category::Scientific,
            vec!["m"],
            CommentSyntax::with_multi_line(
                vec!["%"],
                vec![MultiLineComment::new("%{", "%}").at_line_start()],
            ),
        )
        .with_strings(StringSyntax::new(
            vec![quote("\""), quote("'")],
            None,
        )),
        Language::new(
            "Mathematica",
            Category::Scientific,
            vec!["wl", "wls", "nb"],
            nested(Vec::new(), "(*", "*)"),
        )
        .with_strings(StringSyntax::double_only()),
        Language::new("Stata", Category::Scientific, vec!["do", "ado"], c_style())
            .with_strings(StringSyntax::double_only()),
        Language::new(
            "SAS",
            Category::Scientific,
            vec!["sas"],
            CommentSyntax::new(vec!["*"], vec![("/*", "*/")]),
        )
        .with_strings(StringSyntax::default().without_escape()),
    ]
}

fn markup() -> Vec<Language> {
    let prose = |name: &str, extensions: Vec<&str>, comments: CommentSyntax| {
        Language::new(
            name,
            Category::Markup,
            extensions,
            comments).with_strings(StringSyntax::none(),
        )
    };

    vec![
        prose("Markdown", vec!["md", "markdown"], block("<!--", "-->")),
        Language::new("YAML", Category::Markup, vec!["yml", "yaml"], line(vec!["#"]))
            .with_strings(strings(vec![quote("\""), quote("'").raw()]))
            .indent_based(),
        Language::new("JSON", Category::Markup, vec!["json"], CommentSyntax::default())
            .with_strings(StringSyntax::double_only()),
        prose("XML", vec!["xml", "xsd", "xsl", "xslt", "plist"], block("<!--", "-->")),
        prose("SVG", vec!["svg"], block("<!--", "-->")),
        Language::new("TOML", Category::Markup, vec!["toml"], line(vec!["#"]))
            .with_strings(strings(vec![
                quote("\"\"\"").multiline(),
                quote("'''").multiline().raw(),
                quote("\""),
                quote("'").raw(),
            ]))
            .with_filenames(vec!["Cargo.lock", "Pipfile"]),
        prose("AsciiDoc", vec!["adoc", "asciidoc"], line(vec!["//"])),
        prose("reStructuredText", vec!["rst"], line(vec![".."])),
        prose("Org", vec!["org"], line(vec!["#"])),
        prose("TeX", vec!["tex", "sty", "cls", "ltx"], line(vec!["%"])),
        prose("BibTeX", vec!["bib"], line(vec!["%"])),
    ]
}

fn config() -> Vec<Language> {
    vec![
        Language::new("Makefile", Category::Config, vec!["mk", "mak", "make"], line(vec!["#"]))
            .with_filenames(vec!["Makefile", "makefile", "GNUmakefile"]),
        Language::new("Dockerfile", Category::Config, vec!["dockerfile"], line(vec!["#"]))
            .with_filenames(vec!["Dockerfile", "Containerfile"]),
        Language::new("INI", Category::Config, vec!["ini", "cfg", "conf"], line(vec![";", "#"]))
            .with_strings(StringSyntax::double_only()),
        Language::new("Properties", Category::Config, vec!["properties"], line(vec!["#", "!"]))
            .with_strings(StringSyntax::none()),
        Language::new(
            "CMake",
            Category::Config,
            vec!["cmake"],
            CommentSyntax::new(vec!["#"], vec![("#[[", "]]")]),
        )
        .with_strings(strings(vec![
            quote("\""),
            StringDelimiter::pair("[[", "]]").multiline().raw(),
        ]))
        .with_filenames(vec!["CMakeLists.txt"]),
        Language::new(
            "HCL",
            Category::Config,
            vec!["hcl", "tf", "tfvars"],
            CommentSyntax::new(vec!["#", "//"], vec![("/*", "*/")]),
        )
        .with_strings(StringSyntax::double_only()),
    ]
}

fn domain() -> Vec<Language> {
    let double = StringSyntax::double_only;

    vec![
        Language::new("Verilog", Category::Domain, vec!["v", "vh"], c_style())
            .with_strings(double()),
        Language::new("SystemVerilog", Category::Domain, vec!["sv", "svh"], c_style())
            .with_strings(double()),
        Language::new(
            "VHDL",
            Category::Domain,
            vec!["vhd", "vhdl"],
            CommentSyntax::new(vec!["--"], vec![("/*", "*/")]),
        )
        .with_strings(StringSyntax::new(
            vec![quote("\""), StringDelimiter::char_literal("'")],
            None,
        )),
        Language::new("SPICE", Category::Domain, vec!["sp", "spice", "cir"], line(vec!["*", ";"]))
            .with_strings(StringSyntax::none()),
        Language::new("GDScript", Category::Domain, vec!["gd"], line(vec!["#"]))
            .with_strings(strings(vec![quote("\"\"\"").multiline(), quote("\""), quote("'")]))
            .indent_based(),
        Language::new("OpenSCAD", Category::Domain, vec!["scad"], c_style()).with_strings(double()),
        Language::new("PostScript", Category::Domain, vec!["ps", "eps"], line(vec!["%"]))
            .with_strings(StringSyntax::none()),
        Language::new("Gnuplot", Category::Domain, vec!["gp", "gnuplot", "plt"], line(vec!["#"]))
            .with_interpreters(vec!["gnuplot"]),
        Language::new(
            "DOT",
            Category::Domain,
            vec!["dot", "gv"],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]),
        )
        .with_strings(double()),
        Language::new(
            "PlantUML",
            Category::Domain,
            vec!["puml", "plantuml", "pu"],
            CommentSyntax::new(vec!["'"], vec![("/'", "'/")]),
        )
        .with_strings(double().without_escape()),
        Language::new("Mermaid", Category::Domain, vec!["mmd", "mermaid"], line(vec!["%%"]))
            .with_strings(double().without_escape()),
        Language::new("Protocol Buffers", Category::Domain, vec!["proto"], c_style()),
        Language::new(
            "Thrift",
            Category::Domain,
            vec!["thrift"],
            CommentSyntax::new(vec!["//", "#"], vec![("/*", "*/")]),
        ),
        Language::new("GraphQL", Category::Domain, vec!["graphql", "gql"], line(vec!["#"]))
            .with_strings(strings(vec![quote("\"\"\"").multiline(), quote("\"")])),
        Language::new("Solidity", Category::Domain, vec!["sol"], c_style()),
    ]
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
