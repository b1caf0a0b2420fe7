#![allow(dead_code)]

pub mod snapshot_utils;

use minijava_ast::error::{SourceLocation, Span};
use minijava_ast::*;

/// Route tracing output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn at(line: usize, column: usize) -> Span {
    Span::single(SourceLocation::new(line, column))
}

pub fn ident(name: &str, line: usize) -> Located<Identifier> {
    Identifier::located(name, at(line, 1))
}

pub fn ty(ty: Type, line: usize) -> LocatedType {
    Located::new(ty, at(line, 1))
}

pub fn expr(expr: Expr, line: usize) -> LocatedExpr {
    Located::new(expr, at(line, 1))
}

pub fn int(value: i64, line: usize) -> LocatedExpr {
    expr(Expr::IntegerLiteral(value), line)
}

pub fn var(name: &str, line: usize) -> LocatedExpr {
    expr(Expr::IdentifierExp(name.to_string()), line)
}

pub fn binary(make: fn(BinaryExpr) -> Expr, left: LocatedExpr, right: LocatedExpr) -> LocatedExpr {
    let span = left.span.merge(&right.span);
    Located::new(make(BinaryExpr::new(left, right)), span)
}

pub fn call(receiver: LocatedExpr, method: &str, args: Vec<LocatedExpr>, line: usize) -> LocatedExpr {
    expr(
        Expr::Call(CallExpr {
            receiver: Box::new(receiver),
            method: ident(method, line),
            args,
        }),
        line,
    )
}

pub fn new_object(class_name: &str, line: usize) -> LocatedExpr {
    expr(
        Expr::NewObject(NewObjectExpr {
            class_name: ident(class_name, line),
        }),
        line,
    )
}

pub fn var_decl(declared: Type, names: &[&str], line: usize) -> VarDecl {
    let ids = names.iter().map(|name| ident(name, line)).collect();
    VarDecl::new(ty(declared, line), ids).expect("test declarations name at least one variable")
}

pub fn decl_stmt(declared: Type, names: &[&str], line: usize) -> LocatedStmt {
    Located::new(Stmt::VarDecl(var_decl(declared, names, line)), at(line, 1))
}

pub fn field(declared: Type, names: &[&str], line: usize) -> Located<VarDecl> {
    Located::new(var_decl(declared, names, line), at(line, 1))
}

pub fn print(value: LocatedExpr, line: usize) -> LocatedStmt {
    Located::new(Stmt::Print(PrintStmt { value }), at(line, 1))
}

pub fn assign(target: &str, value: LocatedExpr, line: usize) -> LocatedStmt {
    Located::new(
        Stmt::Assign(AssignStmt {
            target: ident(target, line),
            value,
        }),
        at(line, 1),
    )
}

pub fn block(statements: Vec<LocatedStmt>, line: usize) -> LocatedStmt {
    Located::new(Stmt::Block(BlockStmt { statements }), at(line, 1))
}

pub fn main_class(name: &str, args: &str, body: LocatedStmt, line: usize) -> Located<MainClass> {
    Located::new(
        MainClass {
            name: ident(name, line),
            args: ident(args, line + 1),
            body,
        },
        at(line, 1),
    )
}

pub fn method(
    return_type: Type,
    name: &str,
    formals: &[(Type, &str)],
    body: Vec<LocatedStmt>,
    return_expr: LocatedExpr,
    line: usize,
) -> Located<MethodDecl> {
    let formals = formals
        .iter()
        .map(|(formal_type, formal_name)| {
            Located::new(
                Formal {
                    ty: ty(formal_type.clone(), line),
                    name: ident(formal_name, line),
                },
                at(line, 1),
            )
        })
        .collect();
    Located::new(
        MethodDecl {
            return_type: ty(return_type, line),
            name: ident(name, line),
            formals,
            body,
            return_expr,
        },
        at(line, 5),
    )
}

pub fn program(main_class: Located<MainClass>, classes: Vec<Located<ClassDecl>>) -> Located<Program> {
    Located::new(
        Program {
            main_class,
            classes,
        },
        at(1, 1),
    )
}

/// The classic factorial program:
///
/// ```text
/// class Factorial {                                    // 1
///     public static void main(String[] a) {            // 2
///         System.out.println(new Fac().ComputeFac(10));// 3
///     }
/// }
///
/// class Fac {                                          // 7
///     int calls;                                       // 8
///
///     public int ComputeFac(int num) {                 // 10
///         int num_aux;                                 // 11
///         if (num < 1)                                 // 12
///             num_aux = 1;                             // 13
///         else
///             num_aux = num * this.ComputeFac(num - 1);// 15
///         return num_aux;                              // 16
///     }
/// }
/// ```
pub fn factorial_program() -> Located<Program> {
    let main = main_class(
        "Factorial",
        "a",
        print(
            call(new_object("Fac", 3), "ComputeFac", vec![int(10, 3)], 3),
            3,
        ),
        1,
    );

    let recursive = binary(
        Expr::Times,
        var("num", 15),
        call(
            expr(Expr::This, 15),
            "ComputeFac",
            vec![binary(Expr::Minus, var("num", 15), int(1, 15))],
            15,
        ),
    );
    let if_stmt = Located::new(
        Stmt::If(IfStmt {
            condition: binary(Expr::LessThan, var("num", 12), int(1, 12)),
            then_branch: Box::new(assign("num_aux", int(1, 13), 13)),
            else_branch: Some(Box::new(assign("num_aux", recursive, 15))),
        }),
        at(12, 9),
    );

    let compute = method(
        Type::Integer,
        "ComputeFac",
        &[(Type::Integer, "num")],
        vec![decl_stmt(Type::Integer, &["num_aux"], 11), if_stmt],
        var("num_aux", 16),
        10,
    );

    let fac = Located::new(
        ClassDecl::Simple(SimpleClassDecl {
            name: ident("Fac", 7),
            fields: vec![field(Type::Integer, &["calls"], 8)],
            methods: vec![compute],
        }),
        at(7, 1),
    );

    program(main, vec![fac])
}

/// A program exercising inheritance, arrays, loops and nested blocks.
pub fn counter_program() -> Located<Program> {
    let main = main_class(
        "Main",
        "args",
        block(
            vec![
                print(call(new_object("Counter", 3), "run", vec![int(3, 3)], 3), 3),
                print(int(1, 4), 4),
            ],
            2,
        ),
        1,
    );

    let base = Located::new(
        ClassDecl::Simple(SimpleClassDecl {
            name: ident("Base", 9),
            fields: vec![
                field(Type::IntArray, &["data"], 10),
                field(Type::Boolean, &["ready", "done"], 11),
            ],
            methods: vec![],
        }),
        at(9, 1),
    );

    let loop_body = block(
        vec![
            Located::new(
                Stmt::ArrayAssign(ArrayAssignStmt {
                    target: ident("data", 20),
                    index: var("i", 20),
                    value: binary(Expr::Times, var("i", 20), var("i", 20)),
                }),
                at(20, 13),
            ),
            assign(
                "total",
                binary(
                    Expr::Plus,
                    var("total", 21),
                    expr(
                        Expr::ArrayLookup(ArrayLookupExpr {
                            array: Box::new(var("data", 21)),
                            index: Box::new(var("i", 21)),
                        }),
                        21,
                    ),
                ),
                21,
            ),
            assign("i", binary(Expr::Plus, var("i", 22), int(1, 22)), 22),
        ],
        19,
    );

    let condition = binary(
        Expr::And,
        expr(
            Expr::Not(NotExpr {
                operand: Box::new(binary(Expr::LessThan, var("total", 24), int(10, 24))),
            }),
            24,
        ),
        expr(Expr::True, 24),
    );

    let run = method(
        Type::Integer,
        "run",
        &[(Type::Integer, "n")],
        vec![
            decl_stmt(Type::Integer, &["i", "total"], 15),
            assign("i", int(0, 16), 16),
            assign("total", int(0, 17), 17),
            assign(
                "data",
                expr(
                    Expr::NewArray(NewArrayExpr {
                        size: Box::new(var("n", 18)),
                    }),
                    18,
                ),
                18,
            ),
            Located::new(
                Stmt::While(WhileStmt {
                    condition: binary(Expr::LessThan, var("i", 19), var("n", 19)),
                    body: Box::new(loop_body),
                }),
                at(19, 9),
            ),
            Located::new(
                Stmt::If(IfStmt {
                    condition,
                    then_branch: Box::new(block(vec![assign("ready", expr(Expr::True, 25), 25)], 24)),
                    else_branch: Some(Box::new(block(
                        vec![assign("done", expr(Expr::False, 27), 27)],
                        26,
                    ))),
                }),
                at(24, 9),
            ),
        ],
        var("total", 29),
        14,
    );

    let counter = Located::new(
        ClassDecl::Extends(ExtendsClassDecl {
            name: ident("Counter", 14),
            parent: ident("Base", 14),
            fields: vec![],
            methods: vec![run],
        }),
        at(14, 1),
    );

    program(main, vec![base, counter])
}
