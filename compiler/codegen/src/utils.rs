// codegen/src/utils.rs

/// Generic proxy representation every typed proxy pointer is cast to.
pub const PROXY_STRUCT: &str = "Struct_wl_proxy";

/// Keywords that can be written as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Opaque struct that represents proxies of `interface`, e.g. `Struct_wl_surface`
pub fn struct_name(interface: &str) -> String { format!("Struct_{}", interface) }

/// Listener table struct of `interface`, e.g. `Struct_wl_surface_listener`
pub fn listener_struct_name(interface: &str) -> String { format!("Struct_{}_listener", interface) }

/// Static interface descriptor of `interface`, e.g. `wl_surface_interface`
pub fn interface_descriptor(interface: &str) -> String { format!("{}_interface", interface) }

/// Generated function name, e.g. `wl_surface_attach`
pub fn function_name(interface: &str, request: &str) -> String {
    format!("{}_{}", interface, request)
}

/// Opcode constant name, e.g. `WL_SURFACE_ATTACH`
pub fn opcode_name(interface: &str, request: &str) -> String {
    function_name(interface, request).to_uppercase()
}

/// Local holding the nul-terminated copy of a string argument
pub fn c_string_local(ident: &str) -> String {
    format!("{}_c_string", ident.trim_start_matches("r#").trim_end_matches('_'))
}

/// Sanitizes external identifiers (protocol names) to be valid Rust identifiers
pub fn sanitize_external_identifier(name: &str) -> String {
    match name {
        "self" => "self_".to_string(),
        "Self" => "Self_".to_string(),
        "super" => "super_".to_string(),
        "crate" => "crate_".to_string(),
        kw if RAW_KEYWORDS.contains(&kw) => format!("r#{}", kw),
        _ => {
            // Replace hyphens with underscores and remove other invalid characters
            let sanitized: String = name
                .replace('-', "_")
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect();
            if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                format!("_{}", sanitized)
            } else {
                sanitized
            }
        }
    }
}
