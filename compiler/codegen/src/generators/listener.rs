//! Listener registration.
//!
//! Interfaces with at least one event get `{interface}_add_listener`, which
//! forwards to `wl_proxy_add_listener` and hands back its status untouched.

use ir::Interface;

use crate::utils::{listener_struct_name, sanitize_external_identifier, struct_name, PROXY_STRUCT};
use crate::{CodeGenerator, Result};

/// Generator for the `*_add_listener` function
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenerGenerator;

/// Render the registration function of `interface`, or nothing if it has no events
pub fn render_add_listener(interface: &Interface) -> String {
    if !interface.has_events() {
        return String::new();
    }

    let name = &interface.name;
    let handle = sanitize_external_identifier(name);
    format!(
        "pub fn {name}_add_listener({handle}: *mut {owner}, listener: *const {listener}, data: *mut ::libc::c_void) -> ::libc::c_int {{\n    unsafe {{\n        wl_proxy_add_listener({handle} as *mut {PROXY_STRUCT}, listener as *mut ::std::option::Option<extern \"C\" fn()>, data)\n    }}\n}}\n\n",
        owner = struct_name(name),
        listener = listener_struct_name(name),
    )
}

impl CodeGenerator for ListenerGenerator {
    fn generate(&self, interface: &Interface) -> Result<String> {
        Ok(render_add_listener(interface))
    }
}

#[cfg(test)]
mod tests {
    use ir::Event;

    use super::*;

    #[test]
    fn test_listener_only_with_events() {
        let quiet = Interface::new("wl_compositor", vec![], vec![]);
        assert_eq!(render_add_listener(&quiet), "");

        let chatty = Interface::new("wl_callback", vec![], vec![Event::new("done")]);
        let out = render_add_listener(&chatty);
        assert!(out.starts_with(
            "pub fn wl_callback_add_listener(wl_callback: *mut Struct_wl_callback, listener: *const Struct_wl_callback_listener, data: *mut ::libc::c_void) -> ::libc::c_int {"
        ));
        assert!(out.contains("wl_proxy_add_listener(wl_callback as *mut Struct_wl_proxy, listener as *mut ::std::option::Option<extern \"C\" fn()>, data)"));
        assert_eq!(out.matches("wl_proxy_add_listener").count(), 1);
    }
}
