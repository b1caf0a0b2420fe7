//! Tree rewriting by value
//!
//! A rewriting pass implements [`Fold`] and overrides the methods for the
//! node kinds it changes. Each method takes ownership of a node and returns
//! its replacement, which the caller stores back into the slot the old node
//! came from. Nothing is mutated in place.
//!
//! Every method defaults to the matching `fold_*` free function, which
//! rebuilds the node from folded children and keeps spans unchanged. Leaf
//! kinds (types and identifiers) default to returning the node as is. A pass
//! that overrides a method and still wants the default recursion calls the
//! free function from its override.

use crate::ast::*;

pub trait Fold {
    fn fold_program(&mut self, program: Located<Program>) -> Located<Program> {
        fold_program(self, program)
    }

    fn fold_main_class(&mut self, main_class: Located<MainClass>) -> Located<MainClass> {
        fold_main_class(self, main_class)
    }

    fn fold_class_decl(&mut self, class: Located<ClassDecl>) -> Located<ClassDecl> {
        fold_class_decl(self, class)
    }

    fn fold_var_decl(&mut self, decl: Located<VarDecl>) -> Located<VarDecl> {
        fold_var_decl(self, decl)
    }

    fn fold_method_decl(&mut self, method: Located<MethodDecl>) -> Located<MethodDecl> {
        fold_method_decl(self, method)
    }

    fn fold_formal(&mut self, formal: Located<Formal>) -> Located<Formal> {
        fold_formal(self, formal)
    }

    fn fold_type(&mut self, ty: LocatedType) -> LocatedType {
        ty
    }

    fn fold_stmt(&mut self, stmt: LocatedStmt) -> LocatedStmt {
        fold_stmt(self, stmt)
    }

    fn fold_expr(&mut self, expr: LocatedExpr) -> LocatedExpr {
        fold_expr(self, expr)
    }

    /// Reached for every `Located<Identifier>` slot: class, method, formal
    /// and declared variable names, assignment targets, called methods and
    /// `new C()` class names.
    ///
    /// Variable uses (`Expr::IdentifierExp`) and class types
    /// (`Type::Identifier`) hold a bare name and never pass through here. A
    /// rename that must also reach them overrides [`Fold::fold_expr`] and
    /// [`Fold::fold_type`].
    fn fold_identifier(&mut self, identifier: Located<Identifier>) -> Located<Identifier> {
        identifier
    }
}

pub fn fold_program<F: Fold + ?Sized>(folder: &mut F, program: Located<Program>) -> Located<Program> {
    program.map(|program| Program {
        main_class: folder.fold_main_class(program.main_class),
        classes: program
            .classes
            .into_iter()
            .map(|class| folder.fold_class_decl(class))
            .collect(),
    })
}

pub fn fold_main_class<F: Fold + ?Sized>(
    folder: &mut F,
    main_class: Located<MainClass>,
) -> Located<MainClass> {
    main_class.map(|main_class| MainClass {
        name: folder.fold_identifier(main_class.name),
        args: folder.fold_identifier(main_class.args),
        body: folder.fold_stmt(main_class.body),
    })
}

pub fn fold_class_decl<F: Fold + ?Sized>(
    folder: &mut F,
    class: Located<ClassDecl>,
) -> Located<ClassDecl> {
    class.map(|class| match class {
        ClassDecl::Simple(class) => ClassDecl::Simple(SimpleClassDecl {
            name: folder.fold_identifier(class.name),
            fields: fold_fields(folder, class.fields),
            methods: fold_methods(folder, class.methods),
        }),
        ClassDecl::Extends(class) => ClassDecl::Extends(ExtendsClassDecl {
            name: folder.fold_identifier(class.name),
            parent: folder.fold_identifier(class.parent),
            fields: fold_fields(folder, class.fields),
            methods: fold_methods(folder, class.methods),
        }),
    })
}

fn fold_fields<F: Fold + ?Sized>(
    folder: &mut F,
    fields: Vec<Located<VarDecl>>,
) -> Vec<Located<VarDecl>> {
    fields
        .into_iter()
        .map(|field| folder.fold_var_decl(field))
        .collect()
}

fn fold_methods<F: Fold + ?Sized>(
    folder: &mut F,
    methods: Vec<Located<MethodDecl>>,
) -> Vec<Located<MethodDecl>> {
    methods
        .into_iter()
        .map(|method| folder.fold_method_decl(method))
        .collect()
}

/// Rebuild a declaration; `NonEmpty::map` keeps at least one name.
pub fn fold_var_decl<F: Fold + ?Sized>(folder: &mut F, decl: Located<VarDecl>) -> Located<VarDecl> {
    decl.map(|decl| VarDecl {
        ty: folder.fold_type(decl.ty),
        identifiers: decl.identifiers.map(|id| folder.fold_identifier(id)),
    })
}

pub fn fold_method_decl<F: Fold + ?Sized>(
    folder: &mut F,
    method: Located<MethodDecl>,
) -> Located<MethodDecl> {
    method.map(|method| MethodDecl {
        return_type: folder.fold_type(method.return_type),
        name: folder.fold_identifier(method.name),
        formals: method
            .formals
            .into_iter()
            .map(|formal| folder.fold_formal(formal))
            .collect(),
        body: fold_stmts(folder, method.body),
        return_expr: folder.fold_expr(method.return_expr),
    })
}

pub fn fold_formal<F: Fold + ?Sized>(folder: &mut F, formal: Located<Formal>) -> Located<Formal> {
    formal.map(|formal| Formal {
        ty: folder.fold_type(formal.ty),
        name: folder.fold_identifier(formal.name),
    })
}

fn fold_stmts<F: Fold + ?Sized>(folder: &mut F, stmts: Vec<LocatedStmt>) -> Vec<LocatedStmt> {
    stmts.into_iter().map(|stmt| folder.fold_stmt(stmt)).collect()
}

fn fold_boxed_stmt<F: Fold + ?Sized>(folder: &mut F, stmt: Box<LocatedStmt>) -> Box<LocatedStmt> {
    Box::new(folder.fold_stmt(*stmt))
}

pub fn fold_stmt<F: Fold + ?Sized>(folder: &mut F, stmt: LocatedStmt) -> LocatedStmt {
    let Located { node, span } = stmt;
    let node = match node {
        Stmt::Block(block) => Stmt::Block(BlockStmt {
            statements: fold_stmts(folder, block.statements),
        }),
        Stmt::If(if_stmt) => Stmt::If(IfStmt {
            condition: folder.fold_expr(if_stmt.condition),
            then_branch: fold_boxed_stmt(folder, if_stmt.then_branch),
            else_branch: if_stmt
                .else_branch
                .map(|else_branch| fold_boxed_stmt(folder, else_branch)),
        }),
        Stmt::While(while_stmt) => Stmt::While(WhileStmt {
            condition: folder.fold_expr(while_stmt.condition),
            body: fold_boxed_stmt(folder, while_stmt.body),
        }),
        Stmt::Print(print) => Stmt::Print(PrintStmt {
            value: folder.fold_expr(print.value),
        }),
        Stmt::Assign(assign) => Stmt::Assign(AssignStmt {
            target: folder.fold_identifier(assign.target),
            value: folder.fold_expr(assign.value),
        }),
        Stmt::ArrayAssign(assign) => Stmt::ArrayAssign(ArrayAssignStmt {
            target: folder.fold_identifier(assign.target),
            index: folder.fold_expr(assign.index),
            value: folder.fold_expr(assign.value),
        }),
        // Routed through fold_var_decl so one override covers fields and locals.
        // The returned span replaces the statement's.
        Stmt::VarDecl(decl) => {
            return folder
                .fold_var_decl(Located::new(decl, span))
                .map(Stmt::VarDecl);
        }
    };
    Located::new(node, span)
}

fn fold_boxed_expr<F: Fold + ?Sized>(folder: &mut F, expr: Box<LocatedExpr>) -> Box<LocatedExpr> {
    Box::new(folder.fold_expr(*expr))
}

fn fold_binary<F: Fold + ?Sized>(folder: &mut F, expr: BinaryExpr) -> BinaryExpr {
    BinaryExpr {
        left: fold_boxed_expr(folder, expr.left),
        right: fold_boxed_expr(folder, expr.right),
    }
}

pub fn fold_expr<F: Fold + ?Sized>(folder: &mut F, expr: LocatedExpr) -> LocatedExpr {
    expr.map(|node| match node {
        Expr::And(b) => Expr::And(fold_binary(folder, b)),
        Expr::LessThan(b) => Expr::LessThan(fold_binary(folder, b)),
        Expr::Plus(b) => Expr::Plus(fold_binary(folder, b)),
        Expr::Minus(b) => Expr::Minus(fold_binary(folder, b)),
        Expr::Times(b) => Expr::Times(fold_binary(folder, b)),
        Expr::ArrayLookup(lookup) => Expr::ArrayLookup(ArrayLookupExpr {
            array: fold_boxed_expr(folder, lookup.array),
            index: fold_boxed_expr(folder, lookup.index),
        }),
        Expr::ArrayLength(length) => Expr::ArrayLength(ArrayLengthExpr {
            array: fold_boxed_expr(folder, length.array),
        }),
        Expr::Call(call) => Expr::Call(CallExpr {
            receiver: fold_boxed_expr(folder, call.receiver),
            method: folder.fold_identifier(call.method),
            args: call
                .args
                .into_iter()
                .map(|arg| folder.fold_expr(arg))
                .collect(),
        }),
        Expr::NewArray(new_array) => Expr::NewArray(NewArrayExpr {
            size: fold_boxed_expr(folder, new_array.size),
        }),
        Expr::NewObject(new_object) => Expr::NewObject(NewObjectExpr {
            class_name: folder.fold_identifier(new_object.class_name),
        }),
        Expr::Not(not) => Expr::Not(NotExpr {
            operand: fold_boxed_expr(folder, not.operand),
        }),
        leaf @ (Expr::IntegerLiteral(_)
        | Expr::True
        | Expr::False
        | Expr::IdentifierExp(_)
        | Expr::This) => leaf,
    })
}
