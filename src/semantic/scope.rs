//! Lexically nested scopes, with an RAII guard so a scope is always popped
//! even when a semantic error short-circuits the enclosing call via `?`.

use super::error::SemanticError;
use super::SemanticAnalyzer;
use crate::ast::Type;
use crate::token::Span;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(super) struct Scope {
    variables: HashMap<String, (Type, Span)>,
}

/// Pops its scope on drop. Deref/DerefMut to `SemanticAnalyzer` so callers
/// can keep using the analyzer's methods through the guard.
pub(super) struct ScopeGuard<'a> {
    analyzer: &'a mut SemanticAnalyzer,
}

impl<'a> ScopeGuard<'a> {
    fn new(analyzer: &'a mut SemanticAnalyzer) -> Self {
        analyzer.scopes.push(Scope::default());
        ScopeGuard { analyzer }
    }
}

impl std::ops::Deref for ScopeGuard<'_> {
    type Target = SemanticAnalyzer;
    fn deref(&self) -> &SemanticAnalyzer {
        self.analyzer
    }
}

impl std::ops::DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut SemanticAnalyzer {
        self.analyzer
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.analyzer.scopes.pop();
    }
}

impl SemanticAnalyzer {
    pub(super) fn enter_scope(&mut self) -> ScopeGuard<'_> {
        ScopeGuard::new(self)
    }

    pub(super) fn declare_variable(&mut self, name: &str, ty: Type, span: Span) -> Result<(), SemanticError> {
        let scope = self
            .scopes
            .last_mut()
            .ok_or_else(|| SemanticError::internal_no_scope(name, span))?;
        if let Some((_, existing_span)) = scope.variables.get(name) {
            return Err(SemanticError::duplicate_variable(
                name,
                existing_span.line,
                existing_span.column,
                span,
            ));
        }
        scope.variables.insert(name.to_string(), (ty, span));
        Ok(())
    }

    pub(super) fn lookup_variable(&self, name: &str) -> Option<&Type> {
        for scope in self.scopes.iter().rev() {
            if let Some((ty, _)) = scope.variables.get(name) {
                return Some(ty);
            }
        }
        None
    }
}
