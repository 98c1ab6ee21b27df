// SPDX-License-Identifier: MIT OR Apache-2.0

//! Renders a configuration surface as indented documentation text.
//!
//! The printer is a best-effort reporting tool: a malformed pair or an unreadable
//! field becomes a `WARNING:` line in the output and the dump carries on.

use crate::adapters::StdoutSink;
use crate::introspect::surface::{ConfigSurface, FieldDescriptor, FieldScope, FieldValue, Introspect};
use crate::ports::{Indented, LineSink};

/// Two suffixes whose fields document one item together.
struct Pairing {
    lead: &'static str,
    partner: &'static str,
    describe: fn(&FieldValue) -> String,
}

fn describe_default(value: &FieldValue) -> String {
    format!("{}, default={}", value.type_label(), value.rendered())
}

fn describe_class(value: &FieldValue) -> String {
    value.rendered().to_string()
}

const KEY_DEFAULT: Pairing = Pairing {
    lead: "KEY",
    partner: "DEFAULT",
    describe: describe_default,
};

const PARAMETER_CLASS: Pairing = Pairing {
    lead: "PARAMETER",
    partner: "CLASS",
    describe: describe_class,
};

/// Prints the configuration surface of `T` to standard output.
pub fn print_all<T: Introspect + ?Sized>() {
    print_all_to(&T::config_surface(), &mut StdoutSink);
}

/// Prints `surface` and, recursively, its nested types to `out`.
///
/// # Examples
///
/// ```rust
/// use typedcfg::introspect::{print_all_to, ConfigSurface};
///
/// let surface = ConfigSurface::builder("Rpc")
///     .constant("TYPE_KEY", "raft.rpc.type")
///     .constant("TYPE_DEFAULT", "GRPC")
///     .build();
///
/// let mut lines: Vec<String> = Vec::new();
/// print_all_to(&surface, &mut lines);
///
/// assert_eq!(lines, vec![
///     "",
///     "******* Rpc *******",
///     "  key: raft.rpc.type (str, default=GRPC)",
/// ]);
/// ```
pub fn print_all_to(surface: &ConfigSurface, out: &mut dyn LineSink) {
    out.accept("");
    out.accept(&format!("******* {} *******", surface.name()));

    let mut body = Indented::new(out);
    for field in surface.fields() {
        print_field(surface, &mut body, field);
    }
    for nested in surface.nested() {
        print_all_to(nested, &mut body);
    }
}

fn print_field(surface: &ConfigSurface, out: &mut dyn LineSink, field: &FieldDescriptor) {
    if field.scope() == FieldScope::Instance {
        warn(
            out,
            &format!("Found non-static field {}.{}", surface.name(), field.name()),
        );
        return;
    }
    if print_pair(surface, out, field, &KEY_DEFAULT) {
        return;
    }
    if print_pair(surface, out, field, &PARAMETER_CLASS) {
        return;
    }
    match field.read() {
        Some(value) => out.accept(&format!("constant: {} = {}", field.name(), value.rendered())),
        None => warn(
            out,
            &format!("Failed to access {}.{}", surface.name(), field.name()),
        ),
    }
}

/// Handles `field` if its name carries either suffix of `pairing`.
///
/// Returns `false` only when the field is not part of this pairing at all.
fn print_pair(
    surface: &ConfigSurface,
    out: &mut dyn LineSink,
    field: &FieldDescriptor,
    pairing: &Pairing,
) -> bool {
    let name = field.name();
    if has_suffix(name, pairing.partner).is_some() {
        return true;
    }
    let prefix = match has_suffix(name, pairing.lead) {
        Some(prefix) => prefix,
        None => return false,
    };

    let mut line = format!("{}: ", pairing.lead.to_lowercase());
    match field.read() {
        Some(value) => line.push_str(value.rendered()),
        None => {
            warn(out, &format!("Failed to access {}", name));
            line.push_str(&format!("{} is not public", name));
        }
    }

    let partner_name = format!("{}{}", prefix, pairing.partner);
    line.push_str(" (");
    match surface.field(&partner_name) {
        None => {
            warn(
                out,
                &format!(
                    "{} not found for field {}.{}",
                    pairing.partner,
                    surface.name(),
                    name
                ),
            );
            line.push_str(&format!("{} not found", pairing.partner));
        }
        Some(partner) => match partner.read() {
            Some(value) => line.push_str(&(pairing.describe)(value)),
            None => {
                warn(out, &format!("Failed to access {}", partner_name));
                line.push_str(&format!("{} is not public", partner_name));
            }
        },
    }
    line.push(')');

    out.accept(&line);
    true
}

/// Returns the part of `name` before `_<suffix>`, keeping the underscore.
fn has_suffix<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    name.strip_suffix(suffix).filter(|prefix| prefix.ends_with('_'))
}

fn warn(out: &mut dyn LineSink, message: &str) {
    tracing::warn!("{}", message);
    out.accept(&format!("WARNING: {}", message));
}
