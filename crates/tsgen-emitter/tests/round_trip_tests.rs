//! Round-trip tests: parse, print, parse again.
//!
//! For every sample the reparsed tree must have the same shape as the
//! original, and printing it again must not change the text.

use tsgen_ast::display_statements;
use tsgen_emitter::{PrintOptions, print_to_string};
use tsgen_parser::parse_source;

const CORPUS: &[&str] = &[
    // Expressions
    "x = a + b * c - d / e % f;",
    "x = (a + b) * (c - d);",
    "x = a ** b ** c;",
    "x = a << 2 >>> b >> 1;",
    "x = a < b && c >= d || e != f && !g;",
    "x = a ?? b;",
    "x = a ? b : c ? d : e;",
    "x = y = z += 1;",
    "x = a & b | c ^ d;",
    "x = typeof a === \"undefined\" ? void 0 : delete a.b;",
    "x = -(-y) + +(+z);",
    "x = i++ + --j;",
    "x = a.b.c[d](e, ...rest)?.f!;",
    "x = new Foo<T>(1, 2).bar;",
    "x = new Foo;",
    "x = <number>y;",
    "x = y as unknown as string[];",
    "x = [1, \"two\", true, null, [3]];",
    "x = { a, b: 1, \"c-d\": 2, [k]: 3 };",
    "x = { f() { return this; }, g: 1 };",
    "x = function () { return this.x; };",
    "x = async (a, b = 2, ...c) => a + b;",
    "x = <T>(v: T): T => v;",
    "x = () => ({ a: 1 });",
    "f<string>(\"s\");",
    "x = 'single \\'quoted\\'' + \"tab\\t\";",
    // Statements
    "let a: number = 1, b;",
    "if (a) b(); else if (c) d(); else { e(); }",
    "for (let i = 0, j = 1; i < j; i++, j--) { continue; }",
    "for (const k in o) ;",
    "for (const v of vs) { break; }",
    "while (true) { if (x) break; }",
    "do x++; while (x < 10);",
    "label: while (a) { continue label; }",
    "switch (k) { case 1: case 2: f(); break; default: g(); }",
    "try { f(); } catch (e) { g(e); } finally { h(); }",
    "function f() { throw new Error(\"x\"); }",
    "{ let scoped = 1; }",
    // Declarations
    "export async function f<T extends object = {}>(a: T, b?: string, ...c: number[]): Promise<T> { return a; }",
    "declare function overload(a: string): void;",
    "export abstract class A<T> extends B<T> implements C, D { private readonly x: number = 1; static y?: string; constructor(public z: number) { super(); } get v(): number { return 1; } set v(n: number) {} abstract m(): void; [k: string]: any; }",
    "interface I<T> extends J<T> { readonly a: string; b?: number; m?<U>(u: U): T; (x: number): string; new (x: number): I<T>; [k: string]: any; }",
    "type Fn = <T>(a: T, ...b: T[]) => void;",
    "type Ctor = new (a: string) => Foo;",
    "type U = A | B & C | (D | E)[] | [F, G] | typeof h.i | \"lit\" | 42 | true | null | this;",
    "type O = { a: string; b?: { c: number } };",
    "enum E { A, B = 2, \"c\" = 3 }",
    "export declare const enum CE { X = 1 }",
    "namespace N.M { export const x = 1; }",
    "declare module \"mod\" { export function f(): void; }",
    "import \"side\";",
    "import d, * as ns from \"m\";",
    "import { a, b as c } from \"m\";",
];

/// Samples already in printed layout, so their trivia must come back
/// unchanged.
const COMMENTED: &[&str] = &[
    "// lead\nconst a = 1; // tail\n\n/** Doc. */\nfunction f() {\n    // empty\n}",
    "/**\n * Multi.\n * @param a the a\n * @returns nothing\n */\nfunction g(a: number): void {}",
    "class K {\n    /** x */\n    x = 1;\n\n    // y\n    y = 2;\n}",
    "const o = {\n    // a\n    a: 1,\n    b: 2, // b\n};",
];

fn samples() -> impl Iterator<Item = &'static str> {
    CORPUS.iter().chain(COMMENTED).copied()
}

fn parse(source: &str) -> Vec<tsgen_ast::Stmt> {
    parse_source("test.ts", source)
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"))
}

#[test]
fn test_reparsed_tree_has_same_shape() {
    for source in samples() {
        let original = parse(source);
        let printed = print_to_string(&original, PrintOptions::default());
        let reparsed = parse(&printed);
        assert_eq!(
            display_statements(&reparsed),
            display_statements(&original),
            "shape changed for {source:?}, printed as:\n{printed}"
        );
    }
}

#[test]
fn test_printing_is_idempotent() {
    for source in samples() {
        let once = print_to_string(&parse(source), PrintOptions::default());
        let twice = print_to_string(&parse(&once), PrintOptions::default());
        assert_eq!(once, twice, "printing {source:?} is not stable");
    }
}

#[test]
fn test_round_trip_with_tabs_and_crlf() {
    let options = PrintOptions {
        new_line: "\r\n".to_string(),
        indent_size: 1,
        indent_char: '\t',
        ..PrintOptions::default()
    };
    for source in samples() {
        let original = parse(source);
        let printed = print_to_string(&original, options.clone());
        assert_eq!(
            display_statements(&parse(&printed)),
            display_statements(&original),
            "shape changed for {source:?}"
        );
    }
}

#[test]
fn test_trivia_survives_round_trip() {
    for source in COMMENTED {
        let original = parse(source);
        let printed = print_to_string(&original, PrintOptions::default());
        assert_eq!(parse(&printed), original, "trivia changed for {source:?}");
    }
}
