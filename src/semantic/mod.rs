//! Scope- and type-checking over the parsed AST.
//!
//! Analysis runs in two passes: first every function signature (including
//! ones nested in namespaces) is collected so forward references and mutual
//! recursion work, then the tree is walked a second time to check types and
//! build lexically nested scopes.

mod error;
mod scope;
mod symbols;
mod typecheck_expr;
mod typecheck_stmt;

#[cfg(test)]
mod tests;

pub use error::{SemanticError, SemanticErrorKind};

use crate::ast::{Decl, FuncDecl, StructDecl, TranslationUnit, Type, VarDecl};
use scope::Scope;
use symbols::FunctionSignature;
use std::collections::HashMap;

pub struct SemanticAnalyzer {
    scopes: Vec<Scope>,
    functions: HashMap<String, FunctionSignature>,
    types: HashMap<String, Type>,
    return_type_stack: Vec<Type>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        SemanticAnalyzer {
            scopes: Vec::new(),
            functions: HashMap::new(),
            types: HashMap::new(),
            return_type_stack: Vec::new(),
        }
    }

    /// Checks an entire translation unit. Stops at the first incompatibility.
    pub fn analyze(&mut self, unit: &TranslationUnit) -> Result<(), SemanticError> {
        self.collect_signatures(&unit.decls)?;

        let mut global = self.enter_scope();
        for decl in &unit.decls {
            global.analyze_decl(decl)?;
        }
        Ok(())
    }

    fn collect_signatures(&mut self, decls: &[Decl]) -> Result<(), SemanticError> {
        for decl in decls {
            match decl {
                Decl::Struct(s) => self.collect_struct_type(s)?,
                Decl::Func(f) => self.collect_function_signature(f)?,
                Decl::Namespace(ns) => self.collect_signatures(&ns.decls)?,
                Decl::Var(_) => {}
            }
        }
        Ok(())
    }

    fn collect_struct_type(&mut self, s: &StructDecl) -> Result<(), SemanticError> {
        let mut fields = Vec::new();
        for member in &s.members {
            for init in &member.declarators {
                fields.push((init.declarator.name.clone(), member.ty.clone()));
            }
        }
        let ty = Type::Struct {
            name: s.name.clone(),
            fields,
        };
        self.define_struct_type(&s.name, ty, s.span)
    }

    fn collect_function_signature(&mut self, f: &FuncDecl) -> Result<(), SemanticError> {
        let param_types = f.params.iter().map(|p| p.ty.clone()).collect();
        self.define_function(FunctionSignature {
            name: f.name.clone(),
            param_types,
            return_type: f.return_type.clone(),
            definition_span: f.span,
        })
    }

    fn analyze_decl(&mut self, decl: &Decl) -> Result<(), SemanticError> {
        match decl {
            Decl::Func(f) => self.analyze_function(f),
            Decl::Struct(_) => Ok(()),
            Decl::Namespace(ns) => {
                let mut inner = self.enter_scope();
                for decl in &ns.decls {
                    inner.analyze_decl(decl)?;
                }
                Ok(())
            }
            Decl::Var(v) => self.analyze_var_decl(v),
        }
    }

    fn analyze_function(&mut self, f: &FuncDecl) -> Result<(), SemanticError> {
        self.return_type_stack.push(f.return_type.clone());
        let result = self.analyze_function_body(f);
        self.return_type_stack.pop();
        result
    }

    /// The scope guard here is a local: it pops the function's scope on
    /// every return path, including an early return via `?`.
    fn analyze_function_body(&mut self, f: &FuncDecl) -> Result<(), SemanticError> {
        let mut body_scope = self.enter_scope();
        for param in &f.params {
            body_scope.declare_variable(&param.declarator.name, param.ty.clone(), param.span)?;
        }
        if let Some(body) = &f.body {
            body_scope.analyze_stmt(body)?;
        }
        Ok(())
    }

    fn analyze_var_decl(&mut self, v: &VarDecl) -> Result<(), SemanticError> {
        for init in &v.declarators {
            if let Some(initializer) = &init.initializer {
                if !matches!(initializer.kind, crate::ast::ExprKind::InitList(_)) {
                    let found = self.expr_type(initializer)?;
                    if !found.equals(&v.ty) {
                        return Err(SemanticError::type_mismatch(
                            &v.ty.to_string(),
                            &found.to_string(),
                            initializer.span,
                        ));
                    }
                }
            }
            self.declare_variable(&init.declarator.name, v.ty.clone(), init.span)?;
        }
        Ok(())
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
