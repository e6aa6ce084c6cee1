//! Naming utilities: placeholder class names and title sanitization.

use std::sync::atomic::{AtomicU64, Ordering};

use heck::ToUpperCamelCase;

/// Allocates sequential placeholder class names (`Class0`, `Class1`, ...)
/// for schemas that carry no title.
///
/// The counter is atomic, so concurrent builds sharing an allocator never
/// receive the same name. Indices are never reused or reset.
#[derive(Debug, Default)]
pub struct NameAllocator {
    next: AtomicU64,
}

impl NameAllocator {
    /// Create an allocator starting at `Class0`.
    pub const fn new() -> Self {
        NameAllocator {
            next: AtomicU64::new(0),
        }
    }

    /// Returns the next placeholder class name.
    pub fn next_class_name(&self) -> String {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        format!("Class{}", index)
    }

    /// The process-wide allocator used when build options don't supply one.
    pub fn global() -> &'static NameAllocator {
        static GLOBAL: NameAllocator = NameAllocator::new();
        &GLOBAL
    }
}

/// Convert a schema title into a type-name-safe identifier: leading
/// capital, separators removed (`"my widget-type"` becomes `"MyWidgetType"`).
///
/// A title that starts with a digit after conversion gets a leading
/// underscore so the result stays a valid C# identifier. Returns an empty
/// string for titles with no identifier characters at all; callers treat
/// that the same as a missing title.
pub fn class_name(title: &str) -> String {
    let converted = title.to_upper_camel_case();
    match converted.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("_{}", converted),
        _ => converted,
    }
}
