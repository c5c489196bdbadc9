//! Wayland protocol XML adapter
//!
//! Converts `<protocol>` documents into the typed IR. Request shapes are
//! classified while the IR is built.

use ir::{Arg, ArgType, Event, Interface, Primitive, Protocol, Request};
use semantics::{classify_request, DestructorArgsPolicy};

use crate::xml_tree::{parse_document, XmlElement};
use crate::{SchemaAdapter, SchemaError, SchemaResult};

const DESTRUCTOR_TAG: &str = "destructor";

/// Adapter for Wayland protocol XML files (`wayland.xml`, `xdg-shell.xml`, ...)
#[derive(Debug, Clone, Default)]
pub struct WaylandXmlAdapter {
    destructor_args: DestructorArgsPolicy,
}

impl WaylandXmlAdapter {
    /// Create an adapter that rejects destructors with arguments
    pub fn new() -> Self { Self::default() }

    /// Create an adapter with an explicit destructor-argument policy
    pub fn with_destructor_args(policy: DestructorArgsPolicy) -> Self {
        Self { destructor_args: policy }
    }

    /// Build the IR from an already parsed `<protocol>` element
    pub fn build_protocol(&self, root: &XmlElement) -> SchemaResult<Protocol> {
        if root.tag != "protocol" {
            return Err(SchemaError::UnexpectedRoot { expected: "protocol", found: root.tag.clone() });
        }

        let interfaces = root
            .children_named("interface")
            .map(|el| self.build_interface(el))
            .collect::<SchemaResult<Vec<_>>>()?;

        Ok(Protocol::new(root.optional_attr("name").map(str::to_string), interfaces))
    }

    fn build_interface(&self, el: &XmlElement) -> SchemaResult<Interface> {
        let name = el.required_attr("name")?;
        let version = el
            .optional_attr("version")
            .map(|v| {
                v.parse::<u32>().map_err(|_| SchemaError::InvalidAttribute {
                    element: el.describe(),
                    attribute: "version".to_string(),
                    value: v.to_string(),
                })
            })
            .transpose()?;

        let requests = el
            .children_named("request")
            .map(|r| self.build_request(name, r))
            .collect::<SchemaResult<Vec<_>>>()?;

        let events = el
            .children_named("event")
            .map(|e| Ok(Event { name: e.required_attr("name")?.to_string(), summary: summary_of(e) }))
            .collect::<SchemaResult<Vec<_>>>()?;

        logging::trace(
            "wayland_xml",
            &format!("interface {}: {} requests, {} events", name, requests.len(), events.len()),
        );

        Ok(Interface { name: name.to_string(), version, requests, events })
    }

    fn build_request(&self, interface: &str, el: &XmlElement) -> SchemaResult<Request> {
        let name = el.required_attr("name")?;
        let qualified = format!("{}.{}", interface, name);

        let is_destructor = match el.optional_attr("type") {
            None => false,
            Some(DESTRUCTOR_TAG) => true,
            Some(other) => {
                return Err(SchemaError::UnknownRequestType {
                    request: qualified,
                    tag: other.to_string(),
                })
            }
        };

        let args = el
            .children_named("arg")
            .map(|a| build_arg(&qualified, a))
            .collect::<SchemaResult<Vec<_>>>()?;

        let kind = classify_request(&qualified, is_destructor, &args, self.destructor_args)?;

        Ok(Request { name: name.to_string(), kind, args, summary: summary_of(el) })
    }
}

impl SchemaAdapter for WaylandXmlAdapter {
    fn name(&self) -> &'static str { "wayland-xml" }

    fn parse_protocol(&self, source: &str) -> SchemaResult<Protocol> {
        let root = parse_document(source)?;
        self.build_protocol(&root)
    }
}

fn build_arg(request: &str, el: &XmlElement) -> SchemaResult<Arg> {
    let name = el.required_attr("name")?;
    let ty_name = el.required_attr("type")?;
    let interface = el.optional_attr("interface").map(str::to_string);

    let ty = match ty_name {
        "object" => ArgType::Object {
            interface: interface.ok_or_else(|| SchemaError::MissingInterface {
                request: request.to_string(),
                arg: name.to_string(),
            })?,
        },
        "new_id" => ArgType::NewId { interface },
        other => ArgType::Primitive(other.parse::<Primitive>().map_err(|e| {
            SchemaError::UnknownArgType {
                request: request.to_string(),
                arg: name.to_string(),
                ty: e.0,
            }
        })?),
    };

    Ok(Arg { name: name.to_string(), ty, summary: el.optional_attr("summary").map(str::to_string) })
}

/// `summary` of the element's `<description>` child
fn summary_of(el: &XmlElement) -> Option<String> {
    el.children_named("description")
        .next()
        .and_then(|d| d.optional_attr("summary"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
