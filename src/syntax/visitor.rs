//! Visitor pattern for walking parsed declarations.

use super::declaration::{Declaration, DisplayOption, MetaKey};

/// Visitor over [`Declaration`]s.
///
/// Implement this trait to define behavior per declaration kind.
/// Default implementations are no-ops.
pub trait DeclarationVisitor {
    type Error;

    fn visit_keyword(&mut self, _id: &str, _words: &[String]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_match(
        &mut self,
        _id: &str,
        _pattern: &str,
        _options: &[DisplayOption],
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_region(
        &mut self,
        _id: &str,
        _start: &str,
        _end: &str,
        _options: &[DisplayOption],
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_link(&mut self, _id: &str, _style: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_metadata(&mut self, _key: MetaKey, _value: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Dispatch each declaration to the matching visitor method, in order.
///
/// Stops at the first error.
pub fn walk<'a, V>(
    visitor: &mut V,
    declarations: impl IntoIterator<Item = &'a Declaration>,
) -> Result<(), V::Error>
where
    V: DeclarationVisitor + ?Sized,
{
    for declaration in declarations {
        match declaration {
            Declaration::Keyword { id, words } => visitor.visit_keyword(id, words)?,
            Declaration::Match {
                id,
                pattern,
                options,
            } => visitor.visit_match(id, pattern, options)?,
            Declaration::Region {
                id,
                start,
                end,
                options,
            } => visitor.visit_region(id, start, end, options)?,
            Declaration::Link { id, style } => visitor.visit_link(id, style)?,
            Declaration::Metadata { key, value } => visitor.visit_metadata(*key, value)?,
        }
    }
    Ok(())
}
