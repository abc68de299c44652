//! Integration tests for the printer layout.

use tsgen_ast::factory;
use tsgen_ast::{Modifiers, ParameterKind, PropertyName, Stmt, TsType, TypeKeyword};
use tsgen_emitter::{EmitError, PrintOptions, Printer, print_to_string};
use tsgen_parser::parse_source;

fn parse(source: &str) -> Vec<Stmt> {
    parse_source("test.ts", source).expect("parse")
}

fn format(source: &str) -> String {
    print_to_string(&parse(source), PrintOptions::default())
}

/// Formatting canonical text must reproduce it exactly.
fn assert_stable(source: &str) {
    assert_eq!(format(source), source);
}

// =============================================================================
// List emission
// =============================================================================

#[test]
fn test_empty_object_type_prints_braces() {
    assert_eq!(format("type T = {  };"), "type T = {};\n");

    let mut printer = Printer::new(PrintOptions::default());
    printer.print_type(&factory::object_type(Vec::new()));
    assert_eq!(printer.finish(), "{}");
}

#[test]
fn test_type_members_each_end_with_delimiter() {
    let members = vec![
        factory::property_signature(
            PropertyName::Identifier("a".into()),
            false,
            Some(TsType::STRING),
            Modifiers::READONLY,
        ),
        factory::property_signature(
            PropertyName::Identifier("b".into()),
            true,
            Some(TsType::NUMBER),
            Modifiers::empty(),
        ),
    ];
    let mut printer = Printer::new(PrintOptions::default());
    printer.print_type(&factory::object_type(members));
    assert_eq!(printer.finish(), "{\n    readonly a: string;\n    b?: number;\n}");
}

#[test]
fn test_enum_members_keep_trailing_comma() {
    assert_eq!(
        format("export declare const enum E { A, B = 2 }"),
        "export declare const enum E {\n    A,\n    B = 2,\n}\n"
    );
}

#[test]
fn test_empty_lists() {
    assert_stable("function f() {}\n");
    assert_stable("class A {}\n");
    assert_stable("interface I {}\n");
    assert_stable("const a = [];\nconst o = {};\nf();\n");
}

#[test]
fn test_parameters_print_in_partition_order() {
    let params = factory::parameter_list(vec![
        factory::parameter(ParameterKind::Rest, "rest", Some(factory::array_type(TsType::ANY)))
            .expect("rest"),
        factory::parameter(ParameterKind::Optional, "b", Some(TsType::STRING)).expect("b"),
        factory::parameter(ParameterKind::Required, "a", None).expect("a"),
    ])
    .expect("parameter list");
    let mut printer = Printer::new(PrintOptions::default());
    printer.print_parameters(&params);
    assert_eq!(printer.finish(), "(a, b?: string, ...rest: any[])");
}

#[test]
fn test_type_parameters() {
    let type_params = vec![
        factory::type_parameter("T", Some(TsType::keyword(TypeKeyword::Object)), None)
            .expect("T"),
        factory::type_parameter("U", None, Some(TsType::STRING)).expect("U"),
    ];
    let mut printer = Printer::new(PrintOptions::default());
    printer.print_type_parameters(&type_params);
    printer.print_type_parameters(&[]);
    assert_eq!(printer.finish(), "<T extends object, U = string>");
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_for_with_lexical_declaration() {
    assert_eq!(
        format("for (const x: number = 0; x < 10; x++) { use(x); }"),
        "for (const x: number = 0; x < 10; x++) {\n    use(x);\n}\n"
    );
    assert_eq!(
        format("for (i = 0; i < n; i++) {}"),
        "for (i = 0; i < n; i++) {}\n"
    );
    assert_eq!(format("for (;;) ;"), "for (;;);\n");
}

#[test]
fn test_for_in_and_for_of() {
    assert_stable("for (const k in o) {\n    f(k);\n}\n");
    assert_stable("for (x of xs)\n    f(x);\n");
}

#[test]
fn test_embedded_statements() {
    assert_stable(concat!(
        "if (a) {\n",
        "    b();\n",
        "} else if (c) {\n",
        "    d();\n",
        "} else {\n",
        "    e();\n",
        "}\n",
    ));
    assert_stable("if (a)\n    b();\nelse\n    c();\n");
    assert_stable("while (x)\n    x--;\n");
    assert_stable("do {\n    x++;\n} while (x < 3);\n");
    assert_stable("do\n    x++;\nwhile (x < 3);\n");
}

#[test]
fn test_switch_blank_lines_follow_clause_bodies() {
    let source = "switch (x) { case 1: case 2: a(); break; case 3: b(); default: c(); }";
    let expected = concat!(
        "switch (x) {\n",
        "    case 1:\n",
        "    case 2:\n",
        "        a();\n",
        "        break;\n",
        "\n",
        "    case 3:\n",
        "        b();\n",
        "\n",
        "    default:\n",
        "        c();\n",
        "}\n",
    );
    assert_eq!(format(source), expected);
}

#[test]
fn test_switch_empty_clause_before_default() {
    assert_eq!(
        format("switch (x) { case 1: default: f(); }"),
        "switch (x) {\n    case 1:\n    default:\n        f();\n}\n"
    );
}

#[test]
fn test_try_catch_finally() {
    assert_stable(concat!(
        "try {\n",
        "    f();\n",
        "} catch (e: any) {\n",
        "    g(e);\n",
        "} finally {\n",
        "    h();\n",
        "}\n",
    ));
    assert_stable("try {\n    f();\n} catch {}\n");
}

#[test]
fn test_jumps_and_labels() {
    assert_stable(concat!(
        "outer: for (;;) {\n",
        "    for (;;) {\n",
        "        continue outer;\n",
        "    }\n",
        "    break outer;\n",
        "}\n",
    ));
    assert_stable("function f() {\n    return;\n}\n");
    assert_stable("throw new Error(\"no\");\n");
}

#[test]
fn test_blank_lines_between_statements_are_kept_once() {
    assert_eq!(format("a();\n\n\n\nb();\n"), "a();\n\nb();\n");
    assert_eq!(format("function f() {\n\n    a();\n\n}\n"), "function f() {\n    a();\n}\n");
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn test_precedence_adds_no_parentheses() {
    assert_stable("x = 1 + 2 * 3;\n");
    assert_stable("x = (1 + 2) * 3;\n");
    assert_stable("x = a || b && c;\n");
    assert_stable("x = a - (b - c);\n");
    assert_stable("x = (a, b);\n");
}

#[test]
fn test_unary_operators_do_not_fuse() {
    let minus = factory::unary(
        tsgen_ast::UnaryOp::Minus,
        factory::unary(tsgen_ast::UnaryOp::Minus, factory::number_literal("1")),
    );
    let mut printer = Printer::new(PrintOptions::default());
    printer.print_expression(&minus);
    assert_eq!(printer.finish(), "- -1");

    assert_stable("x = typeof y === \"string\";\n");
    assert_stable("x = !y;\n");
    assert_stable("delete o.p;\n");
}

#[test]
fn test_object_literal_layout() {
    assert_stable("const o = { a: 1, b, ...rest };\n");
    assert_stable("const o = {\n    a: 1,\n    f: () => 2,\n};\n");
    assert_stable("const o = {\n    m() {\n        return 1;\n    },\n};\n");
    assert_stable("const o = {\n    a: 1,\n    b: 2,\n    c: 3,\n    d: 4,\n    e: 5,\n};\n");
}

#[test]
fn test_calls_members_and_casts() {
    assert_stable("a.b?.c(1, \"s\")?.[0]!;\n");
    assert_stable("const m = new Map<string, number>();\n");
    assert_stable("const x = <Foo>y as unknown as Bar;\n");
    assert_stable("f<T>(x);\n");
}

#[test]
fn test_functions_and_arrows() {
    assert_stable(concat!(
        "const f = async (a: number, b?: string): Promise<void> => {\n",
        "    await g(a);\n",
        "};\n",
    ));
    assert_stable("const g = (x) => x + 1;\n");
    assert_stable("const h = function named<T>(x: T): T {\n    return x;\n};\n");
}

#[test]
fn test_strings_are_double_quoted() {
    assert_eq!(format("x = 'it\\'s \"q\"';"), "x = \"it's \\\"q\\\"\";\n");
    assert_eq!(format("x = '\\0';"), "x = \"\\x00\";\n");
}

// =============================================================================
// Declarations
// =============================================================================

#[test]
fn test_class_layout() {
    assert_stable(
        "export abstract class Shape<T extends object = {}> extends Base<T> implements A, B {
    private readonly name: string = \"shape\";
    static count?: number;

    constructor(public x: number, y?: string) {
        super();
    }

    get area(): number {
        return 0;
    }

    set area(value: number) {}
    abstract draw(): void;
    [key: string]: any;
}
",
    );
}

#[test]
fn test_interface_and_type_alias() {
    assert_stable(
        "interface I<T> extends J, K<T> {
    readonly a: string;
    b?(x: number): T;
    (x: string): void;
    new (x: string): I<T>;
    [key: string]: any;
}
",
    );
    assert_stable("type F = (a: string, ...rest: number[]) => void;\n");
    assert_stable("type C = new () => Foo;\n");
    assert_stable("type U = \"a\" | 1 | true | null | (A & B)[];\n");
    assert_stable("type Q = typeof a.b;\n");
    assert_stable("type P = [string, number];\n");
}

#[test]
fn test_namespaces_and_modules() {
    assert_stable("declare namespace a.b {\n    let x: number;\n}\n");
    assert_stable("declare module \"m\" {\n    export function f(): void;\n}\n");
}

#[test]
fn test_imports() {
    assert_stable("import \"side-effect\";\n");
    assert_stable("import d from \"m\";\n");
    assert_stable("import * as ns from \"m\";\n");
    assert_stable("import d, { a, b as c } from \"m\";\n");
}

#[test]
fn test_print_declaration_ends_the_line() {
    let statements = parse("declare function f(): void;");
    let Stmt::Declaration(decl) = &statements[0] else {
        panic!("expected a declaration");
    };
    let mut printer = Printer::new(PrintOptions::default());
    printer.print_declaration(decl);
    assert_eq!(printer.finish(), "declare function f(): void;\n");
}

// =============================================================================
// Options and sinks
// =============================================================================

#[test]
fn test_indent_and_new_line_options() {
    let options = PrintOptions {
        new_line: "\r\n".to_string(),
        indent_size: 2,
        ..PrintOptions::default()
    };
    let output = print_to_string(&parse("function f() { return 1; }"), options);
    assert_eq!(output, "function f() {\r\n  return 1;\r\n}\r\n");

    let tabs = PrintOptions {
        indent_size: 1,
        indent_char: '\t',
        ..PrintOptions::default()
    };
    let output = print_to_string(&parse("if (a) { b(); }"), tabs);
    assert_eq!(output, "if (a) {\n\tb();\n}\n");
}

#[test]
fn test_options_deserialize_with_defaults() {
    let options: PrintOptions =
        serde_json::from_str(r#"{ "indentSize": 2, "indentChar": "\t" }"#).expect("options");
    assert_eq!(options.indent_size, 2);
    assert_eq!(options.indent_char, '\t');
    assert_eq!(options.new_line, "\n");
    assert!(options.collapse_single_line_comments);
    assert!(!options.emit_synthetic_typeparam_tags);

    let empty: PrintOptions = serde_json::from_str("{}").expect("options");
    assert_eq!(empty, PrintOptions::default());
}

#[test]
fn test_emit_to_matches_print_to_string() {
    let statements = parse("// lead\nconst a = 1;\n\nfunction f() {\n    a;\n}\n");
    let mut sink = Vec::new();
    Printer::new(PrintOptions::default())
        .emit_to(&statements, &mut sink)
        .expect("emit");
    assert_eq!(
        String::from_utf8(sink).expect("utf-8"),
        print_to_string(&statements, PrintOptions::default())
    );
}

#[test]
fn test_emit_to_reports_sink_failure() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let statements = parse("a();");
    let err = Printer::new(PrintOptions::default())
        .emit_to(&statements, Broken)
        .expect_err("sink fails");
    assert!(matches!(err, EmitError::Io(_)));
    assert!(err.to_string().starts_with("failed to write emitted text"));
}

#[test]
fn test_shared_subtrees_print_independently() {
    let name = factory::identifier("shared").expect("identifier");
    let call = factory::call(name.clone(), Vec::new(), vec![name]);
    let stmt = factory::expression_stmt(call);
    let statements = vec![stmt.clone(), stmt];
    let output = print_to_string(&statements, PrintOptions::default());
    assert_eq!(output, "shared(shared);\nshared(shared);\n");
}
