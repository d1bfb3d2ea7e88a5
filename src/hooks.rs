//! # Behavior hooks
//!
//! Schema nodes carry runtime behavior as hooks: native hooks with known
//! signatures (resolvers, abstract type resolution, scalar serialization) and
//! opaque plan payloads that a downstream planner interprets. The merger only
//! routes hooks into the right slot on the right node; it never invokes them.
//!
//! Hooks are cheap to clone and compare by identity, so tests and callers can
//! recognize a sentinel hook after merging without calling it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::value::ConstValue;

/// A shared-ownership behavior hook.
///
/// Wraps the hook in an [Arc] so that one configured hook may be attached to
/// many slots without duplication, and so identity comparison via
/// [`Hook::ptr_eq`] survives cloning.
pub struct Hook<F: ?Sized>(Arc<F>);

impl<F: ?Sized> Hook<F> {
    /// Borrows the underlying hook, typically to invoke it.
    #[inline]
    pub fn get(&self) -> &F {
        &self.0
    }

    /// Compares two hooks by identity rather than by value.
    ///
    /// Clones of the same hook compare equal; separately constructed hooks
    /// never do, even when built from identical closures.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> Clone for Hook<F> {
    #[inline]
    fn clone(&self) -> Self {
        Hook(self.0.clone())
    }
}

impl<F: ?Sized> fmt::Debug for Hook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Hook").finish()
    }
}

impl<F: ?Sized> From<Arc<F>> for Hook<F> {
    #[inline]
    fn from(hook: Arc<F>) -> Self {
        Hook(hook)
    }
}

/// An opaque plan payload.
///
/// Plans are meaningful only to the downstream planner that reads the
/// extension slots this crate writes; the merger treats them as inert data.
pub type PlanFn = Hook<dyn Any + Send + Sync>;

impl Hook<dyn Any + Send + Sync> {
    /// Wraps any payload as an opaque plan hook.
    #[inline]
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Hook(Arc::new(payload))
    }

    /// Downcasts the payload back to a concrete type.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).downcast_ref::<T>()
    }
}

/// A field resolver or subscriber, from a parent value and coerced arguments
/// to an output value.
pub type ResolverFn =
    Hook<dyn Fn(&ConstValue, &ConstValue) -> Result<ConstValue> + Send + Sync>;

/// Creates a [ResolverFn] from a closure.
pub fn resolver<F>(f: F) -> ResolverFn
where
    F: Fn(&ConstValue, &ConstValue) -> Result<ConstValue> + Send + Sync + 'static,
{
    Hook(Arc::new(f))
}

/// An abstract type resolver, mapping a runtime value to the name of its
/// concrete object type, or `None` when the value matches no possible type.
pub type ResolveTypeFn = Hook<dyn Fn(&ConstValue) -> Option<String> + Send + Sync>;

/// Creates a [ResolveTypeFn] from a closure.
pub fn resolve_type<F>(f: F) -> ResolveTypeFn
where
    F: Fn(&ConstValue) -> Option<String> + Send + Sync + 'static,
{
    Hook(Arc::new(f))
}

/// A scalar coercion hook: serialization to output, or parsing of an input
/// value or literal.
pub type SerializeFn = Hook<dyn Fn(&ConstValue) -> Result<ConstValue> + Send + Sync>;

/// Input value parsing shares the [SerializeFn] shape.
pub type ParseValueFn = SerializeFn;

/// Literal parsing shares the [SerializeFn] shape.
pub type ParseLiteralFn = SerializeFn;

/// Creates a [SerializeFn] (or parse hook) from a closure.
pub fn serializer<F>(f: F) -> SerializeFn
where
    F: Fn(&ConstValue) -> Result<ConstValue> + Send + Sync + 'static,
{
    Hook(Arc::new(f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_survives_cloning() {
        let plan = PlanFn::new(7u32);
        let copy = plan.clone();
        assert!(plan.ptr_eq(&copy));
        assert_eq!(copy.downcast_ref::<u32>(), Some(&7));

        let other = PlanFn::new(7u32);
        assert!(!plan.ptr_eq(&other));
    }

    #[test]
    fn native_hooks_are_callable() {
        let resolve = resolver(|_parent, _args| Ok(ConstValue::from("hello")));
        let out = (resolve.get())(&ConstValue::Null, &ConstValue::Null).unwrap();
        assert_eq!(out, ConstValue::from("hello"));

        let resolve_type = resolve_type(|value| value.as_str().map(|s| s.to_string()));
        assert_eq!(
            (resolve_type.get())(&ConstValue::from("Human")),
            Some("Human".to_string())
        );
    }
}
