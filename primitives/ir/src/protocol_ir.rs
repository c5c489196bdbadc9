//! Wlscan Intermediate Representation
//!
//! The tree mirrors the protocol description:
//! protocol → interfaces → {requests, events} → arguments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Root of a protocol description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Protocol {
    /// Protocol name (e.g. "wayland"), if the description declares one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Interfaces in declaration order
    pub interfaces: Vec<Interface>,
}

/// An interface: a namespace for requests and events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    /// Interface name, used as the prefix of every generated symbol
    pub name: String,
    /// Interface version, if declared
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Requests in declaration order. The position of a request is its opcode.
    pub requests: Vec<Request>,
    /// Events in declaration order
    pub events: Vec<Event>,
}

/// A request sent from the client to the compositor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Request name, unique within its interface
    pub name: String,
    /// Shape of the request, computed once when the IR is built
    pub kind: RequestKind,
    /// Arguments in declaration order
    pub args: Vec<Arg>,
    /// One-line summary taken from the request's description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// An event sent from the compositor to the client.
///
/// Only the presence of events matters to code generation, so their
/// arguments are not carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event name
    pub name: String,
    /// One-line summary taken from the event's description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A request argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    /// Argument name
    pub name: String,
    /// Argument type
    pub ty: ArgType,
    /// Inline summary attribute, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Type of a request argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgType {
    /// A value of the fixed primitive vocabulary
    Primitive(Primitive),
    /// A reference to an existing object of the named interface
    Object {
        /// Interface of the referenced object
        interface: String,
    },
    /// The id of an object created by this request
    NewId {
        /// Interface of the created object; `None` when the caller picks it at call time
        interface: Option<String>,
    },
}

/// Primitive wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    /// 32-bit signed integer
    Int,
    /// 32-bit unsigned integer
    Uint,
    /// 24.8 signed fixed-point number
    Fixed,
    /// File descriptor
    Fd,
    /// UTF-8 string
    String,
    /// Opaque byte array
    Array,
}

/// The three shapes a request can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    /// Marshals its arguments and returns nothing
    Plain,
    /// Creates a new object and returns its proxy
    Constructor(NewIdTarget),
    /// Destroys the proxy it is called on
    Destructor,
}

/// Interface of the object created by a constructor request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewIdTarget {
    /// The interface is fixed by the protocol description
    Static(String),
    /// The caller supplies the interface descriptor and version
    Dynamic,
}

/// Error returned when a primitive type name is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPrimitive(pub String);

impl fmt::Display for UnknownPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown primitive type `{}`", self.0)
    }
}

impl std::error::Error for UnknownPrimitive {}

impl Primitive {
    /// Name of the primitive as written in protocol descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Uint => "uint",
            Primitive::Fixed => "fixed",
            Primitive::Fd => "fd",
            Primitive::String => "string",
            Primitive::Array => "array",
        }
    }
}

impl FromStr for Primitive {
    type Err = UnknownPrimitive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Primitive::Int),
            "uint" => Ok(Primitive::Uint),
            "fixed" => Ok(Primitive::Fixed),
            "fd" => Ok(Primitive::Fd),
            "string" => Ok(Primitive::String),
            "array" => Ok(Primitive::Array),
            other => Err(UnknownPrimitive(other.to_string())),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl Protocol {
    /// Create a new protocol from its interfaces
    pub fn new(name: Option<String>, interfaces: Vec<Interface>) -> Self {
        Self { name, interfaces }
    }

    /// Load a Protocol from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let protocol: Self = serde_json::from_str(&content)?;
        Ok(protocol)
    }

    /// Save the Protocol to a JSON file with pretty formatting
    pub fn to_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        // Ensure file ends with a newline (POSIX standard)
        use std::io::Write;
        writeln!(file)?;
        Ok(())
    }

    /// Get an interface by name
    pub fn get_interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    /// Total number of requests across all interfaces
    pub fn request_count(&self) -> usize { self.interfaces.iter().map(|i| i.requests.len()).sum() }
}

impl Interface {
    /// Create an interface with no version attribute
    pub fn new(name: impl Into<String>, requests: Vec<Request>, events: Vec<Event>) -> Self {
        Self { name: name.into(), version: None, requests, events }
    }

    /// Requests paired with their opcodes.
    ///
    /// Opcodes are the dense range `0..requests.len()` in declaration order.
    pub fn opcodes(&self) -> impl Iterator<Item = (u32, &Request)> + '_ {
        self.requests.iter().enumerate().map(|(i, r)| (i as u32, r))
    }

    /// Whether this interface declares at least one event
    pub fn has_events(&self) -> bool { !self.events.is_empty() }
}

impl Request {
    /// Create a request without a summary
    pub fn new(name: impl Into<String>, kind: RequestKind, args: Vec<Arg>) -> Self {
        Self { name: name.into(), kind, args, summary: None }
    }

    /// The new_id argument of a constructor request
    pub fn new_id_arg(&self) -> Option<&Arg> { self.args.iter().find(|a| a.is_new_id()) }
}

impl Event {
    /// Create an event without a summary
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), summary: None } }
}

impl Arg {
    /// Create an argument without a summary
    pub fn new(name: impl Into<String>, ty: ArgType) -> Self {
        Self { name: name.into(), ty, summary: None }
    }

    /// Whether this argument is the new object id slot
    pub fn is_new_id(&self) -> bool { matches!(self.ty, ArgType::NewId { .. }) }

    /// Whether this argument is a string
    pub fn is_string(&self) -> bool { matches!(self.ty, ArgType::Primitive(Primitive::String)) }
}
