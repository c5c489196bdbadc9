//! Request functions.
//!
//! Every request becomes `pub fn {interface}_{request}` taking the owning
//! proxy first. The body depends on the request's shape:
//!
//! - destructor: a single `wl_proxy_destroy` call; declared arguments are not used
//! - constructor: `wl_proxy_marshal_constructor`, returning the new proxy
//! - plain: `wl_proxy_marshal`, returning nothing
//!
//! String arguments are copied into a `CString` before the marshal call and
//! the pointer of that copy is passed instead. The copy is a local of the
//! generated function, so it is released only after the call has returned.

use std::collections::HashSet;

use ir::{ArgType, Interface, NewIdTarget, Request, RequestKind};

use super::doc_comment::format_doc_comment;
use super::type_mapper::param_type;
use crate::utils::{
    c_string_local, function_name, interface_descriptor, opcode_name, sanitize_external_identifier,
    struct_name, PROXY_STRUCT,
};
use crate::{CodeGenerator, CodegenError, EmitOptions, Result};

/// Placeholder passed in the new_id slot; the native library fills in the id.
const NEW_ID_PLACEHOLDER: &str = "::std::ptr::null::<::libc::c_void>()";

/// Return type of constructors whose interface is chosen at call time.
const DYNAMIC_RETURN_TYPE: &str = "*mut ::libc::c_void";

/// Generator for the request functions of an interface
#[derive(Debug, Clone, Default)]
pub struct RequestGenerator {
    options: EmitOptions,
}

impl RequestGenerator {
    /// Create a request generator with the given options
    pub fn new(options: EmitOptions) -> Self { Self { options } }
}

impl CodeGenerator for RequestGenerator {
    fn generate(&self, interface: &Interface) -> Result<String> {
        let mut out = String::new();
        for (_, request) in interface.opcodes() {
            out.push_str(&render_request(&interface.name, request, &self.options)?);
        }
        Ok(out)
    }
}

/// Signature pieces and marshal arguments collected from a request's arguments.
#[derive(Debug, Default)]
struct Marshalling {
    /// `name: Type` parameters, owner handle first
    params: Vec<String>,
    /// Expressions passed to the marshal call after the opcode
    call_args: Vec<String>,
    /// `let` lines that must run before the marshal call
    setup: Vec<String>,
    /// Name of the local receiving the new proxy (constructors only)
    result: Option<String>,
    /// Locals the generated body declares besides its parameters
    locals: Vec<String>,
}

/// Render one request function followed by a blank line.
pub fn render_request(interface: &str, request: &Request, options: &EmitOptions) -> Result<String> {
    let fn_name = function_name(interface, &request.name);
    let owner = sanitize_external_identifier(interface);
    let owner_param = format!("{}: *mut {}", owner, struct_name(interface));

    let mut out = String::new();
    if options.emit_docs {
        if let Some(summary) = &request.summary {
            out.push_str(&format_doc_comment(summary));
        }
    }

    match &request.kind {
        RequestKind::Destructor => {
            if !request.args.is_empty() {
                logging::debug(
                    "codegen",
                    &format!("{}: destructor arguments are not marshalled", fn_name),
                );
            }
            out.push_str(&format!(
                "pub fn {fn_name}({owner_param}) -> () {{\n    unsafe {{\n        wl_proxy_destroy({owner} as *mut {PROXY_STRUCT});\n    }}\n}}\n\n"
            ));
        }
        RequestKind::Constructor(target) => {
            let m = collect(interface, request, Some(target), owner_param)?;
            let result = m.result.clone().ok_or_else(|| CodegenError::InconsistentShape {
                request: format!("{}.{}", interface, request.name),
                reason: "constructor without a new_id argument".to_string(),
            })?;
            let return_type = match target {
                NewIdTarget::Static(iface) => format!("*mut {}", struct_name(iface)),
                NewIdTarget::Dynamic => DYNAMIC_RETURN_TYPE.to_string(),
            };

            out.push_str(&signature(&fn_name, &m.params, &return_type));
            out.push_str(&format!("    let {result}: *mut {PROXY_STRUCT};\n"));
            push_setup(&mut out, &m.setup);
            out.push_str(&format!(
                "    unsafe {{\n        {result} = wl_proxy_marshal_constructor({owner} as *mut {PROXY_STRUCT}, {opcode}, {args});\n    }}\n",
                opcode = opcode_name(interface, &request.name),
                args = m.call_args.join(", "),
            ));
            out.push_str(&format!("    {result} as {return_type}\n}}\n\n"));
        }
        RequestKind::Plain => {
            let m = collect(interface, request, None, owner_param)?;
            let mut call_args = vec![opcode_name(interface, &request.name)];
            call_args.extend(m.call_args);

            out.push_str(&signature(&fn_name, &m.params, "()"));
            push_setup(&mut out, &m.setup);
            out.push_str(&format!(
                "    unsafe {{\n        wl_proxy_marshal({owner} as *mut {PROXY_STRUCT}, {args});\n    }}\n}}\n\n",
                args = call_args.join(", "),
            ));
        }
    }

    Ok(out)
}

/// Walk the arguments in declaration order, building parameters and marshal arguments.
///
/// The new_id argument is not a parameter. Its slot in the marshal arguments
/// holds the placeholder, preceded for dynamic targets by the interface name
/// and version; the interface descriptor itself goes first.
fn collect(
    interface: &str,
    request: &Request,
    target: Option<&NewIdTarget>,
    owner_param: String,
) -> Result<Marshalling> {
    let qualified = format!("{}.{}", interface, request.name);
    if request.args.iter().filter(|a| a.is_new_id()).count() > 1 {
        return Err(CodegenError::InconsistentShape {
            request: qualified,
            reason: "more than one new_id argument".to_string(),
        });
    }

    let mut m = Marshalling { params: vec![owner_param], ..Default::default() };
    match (request.new_id_arg(), target) {
        (Some(arg), None) => {
            return Err(CodegenError::InconsistentShape {
                request: qualified,
                reason: format!("plain request declares new_id argument `{}`", arg.name),
            });
        }
        (Some(arg), Some(_)) => {
            let result = sanitize_external_identifier(&arg.name);
            m.locals.push(result.clone());
            m.result = Some(result);
        }
        (None, _) => {}
    }

    let mut descriptor = None;
    for arg in &request.args {
        let ident = sanitize_external_identifier(&arg.name);
        match (&arg.ty, target) {
            (ArgType::NewId { .. }, Some(NewIdTarget::Static(iface))) => {
                descriptor = Some(format!("&{}", interface_descriptor(iface)));
                m.call_args.push(NEW_ID_PLACEHOLDER.to_string());
            }
            (ArgType::NewId { .. }, _) => {
                m.params.push(format!("interface: *const {}", struct_name("wl_interface")));
                m.params.push("version: u32".to_string());
                descriptor = Some("interface".to_string());
                m.call_args.push("(*interface).name".to_string());
                m.call_args.push("version".to_string());
                m.call_args.push(NEW_ID_PLACEHOLDER.to_string());
            }
            (ty, _) if arg.is_string() => {
                let local = c_string_local(&ident);
                m.setup.push(format!(
                    "let {local} = ::std::ffi::CString::new({ident}).expect(\"{qualified}: `{name}` contains an interior nul byte\");",
                    name = arg.name,
                ));
                m.call_args.push(format!("{}.as_ptr()", local));
                m.params.push(format!("{}: {}", ident, param_type(&arg.name, ty)?));
                m.locals.push(local);
            }
            (ty, _) => {
                m.params.push(format!("{}: {}", ident, param_type(&arg.name, ty)?));
                m.call_args.push(ident);
            }
        }
    }

    if let Some(descriptor) = descriptor {
        m.call_args.insert(0, descriptor);
    }

    let names = m.params.iter().map(|p| p.split(':').next().unwrap_or(p).trim());
    check_unique_names(
        &function_name(interface, &request.name),
        names.chain(m.locals.iter().map(String::as_str)),
    )?;
    Ok(m)
}

/// Parameters and locals share one scope in the generated function.
fn check_unique_names<'a>(function: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CodegenError::DuplicateParameter {
                function: function.to_string(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn signature(fn_name: &str, params: &[String], return_type: &str) -> String {
    // Owner handle plus seven arguments is where clippy starts to complain.
    let allow = if params.len() > 7 { "#[allow(clippy::too_many_arguments)]\n" } else { "" };
    format!("{allow}pub fn {fn_name}({}) -> {return_type} {{\n", params.join(", "))
}

fn push_setup(out: &mut String, setup: &[String]) {
    for line in setup {
        out.push_str("    ");
        out.push_str(line);
        out.push('\n');
    }
}
