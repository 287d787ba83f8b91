//! The function signature table and the named-struct-type table.

use super::error::SemanticError;
use super::SemanticAnalyzer;
use crate::ast::Type;
use crate::token::Span;

#[derive(Debug, Clone)]
pub(super) struct FunctionSignature {
    pub name: String,
    pub param_types: Vec<Type>,
    pub return_type: Type,
    pub definition_span: Span,
}

impl SemanticAnalyzer {
    pub(super) fn define_function(&mut self, sig: FunctionSignature) -> Result<(), SemanticError> {
        if let Some(existing) = self.functions.get(&sig.name) {
            return Err(SemanticError::duplicate_function(
                &sig.name,
                existing.definition_span.line,
                existing.definition_span.column,
                sig.definition_span,
            ));
        }
        self.functions.insert(sig.name.clone(), sig);
        Ok(())
    }

    pub(super) fn lookup_function(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.get(name)
    }

    pub(super) fn define_struct_type(&mut self, name: &str, ty: Type, span: Span) -> Result<(), SemanticError> {
        if self.types.contains_key(name) {
            return Err(SemanticError::duplicate_struct(name, span));
        }
        self.types.insert(name.to_string(), ty);
        Ok(())
    }

    pub(super) fn lookup_struct_type(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }
}
