//! Request shape classification
//!
//! Every request is exactly one of plain, constructor or destructor. The
//! shape is computed once, here, and code generation matches on it.

use ir::{Arg, ArgType, NewIdTarget, RequestKind};
use serde::{Deserialize, Serialize};

use crate::{Result, SemanticError};

/// What to do with a destructor request that declares arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestructorArgsPolicy {
    /// Refuse the protocol description
    #[default]
    Reject,
    /// Keep the request as a destructor and leave the arguments out of the binding
    Ignore,
}

/// Classify a request from its destructor tag and its arguments.
///
/// `qualified_name` is only used for diagnostics (`interface.request`).
pub fn classify_request(
    qualified_name: &str,
    is_destructor: bool,
    args: &[Arg],
    policy: DestructorArgsPolicy,
) -> Result<RequestKind> {
    let new_ids: Vec<&Arg> = args.iter().filter(|a| a.is_new_id()).collect();

    if new_ids.len() > 1 {
        return Err(SemanticError::MultipleNewIds {
            request: qualified_name.to_string(),
            count: new_ids.len(),
        });
    }

    if is_destructor {
        if !new_ids.is_empty() {
            return Err(SemanticError::DestructorWithNewId { request: qualified_name.to_string() });
        }
        if !args.is_empty() {
            let names = args.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ");
            match policy {
                DestructorArgsPolicy::Reject => {
                    return Err(SemanticError::DestructorWithArgs {
                        request: qualified_name.to_string(),
                        args: names,
                    });
                }
                DestructorArgsPolicy::Ignore => {
                    logging::warn(
                        "semantics",
                        &format!(
                            "destructor `{}` declares arguments ({}); they are left out of the binding",
                            qualified_name, names
                        ),
                    );
                }
            }
        }
        return Ok(RequestKind::Destructor);
    }

    match new_ids.first().map(|a| &a.ty) {
        Some(ArgType::NewId { interface: Some(iface) }) => {
            Ok(RequestKind::Constructor(NewIdTarget::Static(iface.clone())))
        }
        Some(ArgType::NewId { interface: None }) => Ok(RequestKind::Constructor(NewIdTarget::Dynamic)),
        _ => Ok(RequestKind::Plain),
    }
}

#[cfg(test)]
mod tests {
    use ir::Primitive;

    use super::*;

    fn new_id(name: &str, iface: Option<&str>) -> Arg {
        Arg::new(name, ArgType::NewId { interface: iface.map(str::to_string) })
    }

    #[test]
    fn test_plain_request() {
        let args = vec![
            Arg::new("x", ArgType::Primitive(Primitive::Int)),
            Arg::new("title", ArgType::Primitive(Primitive::String)),
        ];
        let kind = classify_request("wl_surface.attach", false, &args, DestructorArgsPolicy::Reject)
            .expect("plain request should classify");
        assert_eq!(kind, RequestKind::Plain);
    }

    #[test]
    fn test_static_and_dynamic_constructors() {
        let kind = classify_request(
            "wl_display.sync",
            false,
            &[new_id("callback", Some("wl_callback"))],
            DestructorArgsPolicy::Reject,
        )
        .expect("static constructor should classify");
        assert_eq!(kind, RequestKind::Constructor(NewIdTarget::Static("wl_callback".into())));

        let kind = classify_request(
            "wl_registry.bind",
            false,
            &[Arg::new("name", ArgType::Primitive(Primitive::Uint)), new_id("id", None)],
            DestructorArgsPolicy::Reject,
        )
        .expect("dynamic constructor should classify");
        assert_eq!(kind, RequestKind::Constructor(NewIdTarget::Dynamic));
    }

    #[test]
    fn test_destructor_shapes() {
        let kind = classify_request("wl_buffer.destroy", true, &[], DestructorArgsPolicy::Reject)
            .expect("argument-free destructor should classify");
        assert_eq!(kind, RequestKind::Destructor);

        let err = classify_request(
            "wl_thing.destroy",
            true,
            &[new_id("id", Some("wl_thing"))],
            DestructorArgsPolicy::Ignore,
        )
        .expect_err("destructor with new_id must be rejected under every policy");
        assert_eq!(err, SemanticError::DestructorWithNewId { request: "wl_thing.destroy".into() });
    }

    #[test]
    fn test_destructor_args_policy() {
        let args = vec![
            Arg::new("serial", ArgType::Primitive(Primitive::Uint)),
            Arg::new("reason", ArgType::Primitive(Primitive::String)),
        ];

        let err = classify_request("wl_thing.release", true, &args, DestructorArgsPolicy::Reject)
            .expect_err("destructor arguments are rejected by default");
        assert_eq!(
            err,
            SemanticError::DestructorWithArgs {
                request: "wl_thing.release".into(),
                args: "serial, reason".into(),
            }
        );

        let kind = classify_request("wl_thing.release", true, &args, DestructorArgsPolicy::Ignore)
            .expect("ignored destructor arguments should classify");
        assert_eq!(kind, RequestKind::Destructor);
    }

    #[test]
    fn test_multiple_new_ids() {
        let err = classify_request(
            "wl_thing.split",
            false,
            &[new_id("a", Some("wl_a")), new_id("b", Some("wl_b"))],
            DestructorArgsPolicy::Reject,
        )
        .expect_err("two new_ids are unsupported");
        assert_eq!(err, SemanticError::MultipleNewIds { request: "wl_thing.split".into(), count: 2 });
        assert!(err.to_string().contains("at most one"));
    }

    #[test]
    fn test_default_policy_rejects() {
        assert_eq!(DestructorArgsPolicy::default(), DestructorArgsPolicy::Reject);
    }
}
