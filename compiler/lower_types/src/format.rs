//! Type formatting for debugging and trace output.

#![allow(clippy::format_push_string)] // Debug formatting prioritizes clarity over allocation

use crate::{ensure_sufficient_stack, TypeData, TypeId, TypeInterner};

impl TypeInterner {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, id: TypeId) -> String {
        let mut buf = String::new();
        self.format_type_into(id, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    ///
    /// [`TypeId::NONE`] renders as `<none>`.
    pub fn format_type_into(&self, id: TypeId, buf: &mut String) {
        if id.is_none() {
            buf.push_str("<none>");
            return;
        }

        // Clone out of the shard so recursion never re-enters a held lock.
        ensure_sufficient_stack(|| match self.lookup(id) {
            TypeData::Int => buf.push_str("int"),
            TypeData::Float => buf.push_str("float"),
            TypeData::Bool => buf.push_str("bool"),
            TypeData::Str => buf.push_str("str"),

            TypeData::Tuple(elems) => {
                buf.push('(');
                self.format_list(&elems, buf);
                if elems.len() == 1 {
                    buf.push(',');
                }
                buf.push(')');
            }
            TypeData::Function { input, result } => {
                if self.tuple_arity(input).is_some() {
                    self.format_type_into(input, buf);
                } else {
                    buf.push('(');
                    self.format_type_into(input, buf);
                    buf.push(')');
                }
                buf.push_str(" -> ");
                self.format_type_into(result, buf);
            }
            TypeData::InOut(object) => {
                buf.push_str("inout ");
                self.format_type_into(object, buf);
            }

            TypeData::Nominal { name, args } => {
                buf.push_str(&name);
                if !args.is_empty() {
                    buf.push('<');
                    self.format_list(&args, buf);
                    buf.push('>');
                }
            }
            TypeData::Metatype(instance) => {
                self.format_type_into(instance, buf);
                buf.push_str(".Type");
            }

            TypeData::Archetype { name, .. } => buf.push_str(&name),
            TypeData::GenericParam { depth, index } => {
                buf.push_str(&format!("τ_{depth}_{index}"));
            }
            TypeData::DependentMember { base, assoc } => {
                self.format_type_into(base, buf);
                buf.push('.');
                buf.push_str(&assoc);
            }
        });
    }

    fn format_list(&self, ids: &[TypeId], buf: &mut String) {
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.format_type_into(id, buf);
        }
    }
}

#[cfg(test)]
mod tests;
