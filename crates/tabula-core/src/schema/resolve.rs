use super::{
    grammar::{check_brackets, parse_type_descriptor, split_top_level},
    Field, PrimitiveType, Type,
};
use crate::{err, Error, Result};

/// Resolves a catalog type descriptor into a [`Type`].
///
/// Nested types are resolved recursively:
///
/// - `array<T>` becomes [`Type::List`]
/// - `struct<a:T,b:U>` becomes [`Type::Record`], fields in declaration order
/// - `map<K,V>` becomes [`Type::KeyValueList`]
/// - anything else is looked up in the primitive table, ignoring case
///
/// A parenthesized suffix on a primitive (`decimal(10,2)`, `varchar(64)`) is
/// accepted and dropped.
///
/// # Errors
///
/// Returns an [unsupported type](Error::unsupported_type) error when a base
/// type is neither nested nor primitive, and a
/// [malformed type](Error::malformed_type) error when the descriptor does not
/// follow the grammar or nests deeper than [`MAX_NESTING_DEPTH`]. Errors
/// inside a struct are prefixed with the field name.
pub fn resolve_type(type_str: &str) -> Result<Type> {
    let type_str = type_str.trim();

    check_brackets(type_str).map_err(|reason| Error::malformed_type(type_str, reason))?;

    resolve_nested(type_str, 0)
}

/// Deepest nesting accepted by [`resolve_type`].
pub const MAX_NESTING_DEPTH: usize = 256;

// Bracket balance is checked once, by `resolve_type`.
fn resolve_nested(type_str: &str, depth: usize) -> Result<Type> {
    let type_str = type_str.trim();

    if type_str.is_empty() {
        return Err(Error::malformed_type(type_str, "empty type"));
    }

    if depth > MAX_NESTING_DEPTH {
        return Err(Error::malformed_type(
            type_str,
            format!("nesting exceeds {MAX_NESTING_DEPTH} levels"),
        ));
    }

    let (base, content) = parse_type_descriptor(type_str);

    if type_str.contains('<') && !type_str.ends_with('>') {
        return Err(Error::malformed_type(
            type_str,
            "unexpected characters after closing '>'",
        ));
    }

    match base.as_str() {
        "array" => resolve_array(type_str, content, depth),
        "struct" => resolve_struct(type_str, content, depth),
        "map" => resolve_map(type_str, content, depth),
        _ => resolve_primitive(type_str, &base, content),
    }
}

fn resolve_array(type_str: &str, content: &str, depth: usize) -> Result<Type> {
    if content.is_empty() {
        return Err(Error::malformed_type(type_str, "array has no element type"));
    }

    Ok(Type::list(resolve_nested(content, depth + 1)?))
}

fn resolve_struct(type_str: &str, content: &str, depth: usize) -> Result<Type> {
    if content.is_empty() {
        return Err(Error::malformed_type(type_str, "struct has no fields"));
    }

    let fields = split_top_level(content)
        .into_iter()
        .map(|fragment| {
            let Some((name, ty)) = fragment.split_once(':') else {
                return Err(Error::malformed_type(
                    fragment,
                    "struct field is missing its `name:` prefix",
                ));
            };

            let name = name.trim();
            if name.is_empty() {
                return Err(Error::malformed_type(fragment, "struct field has no name"));
            }

            let ty =
                resolve_nested(ty, depth + 1).map_err(|e| e.context(err!("field '{name}'")))?;
            Ok(Field::new(name, ty))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Type::Record(fields))
}

fn resolve_map(type_str: &str, content: &str, depth: usize) -> Result<Type> {
    let fragments = split_top_level(content);
    let (key, value) = match fragments[..] {
        [key, value] if !key.is_empty() && !value.is_empty() => (key, value),
        _ => {
            return Err(Error::malformed_type(
                type_str,
                "map expects a key type and a value type",
            ))
        }
    };

    let key = resolve_nested(key, depth + 1).map_err(|e| e.context("map key"))?;
    let value = resolve_nested(value, depth + 1).map_err(|e| e.context("map value"))?;

    Ok(Type::key_value_list(key, value))
}

fn resolve_primitive(type_str: &str, base: &str, content: &str) -> Result<Type> {
    // `decimal(10,2)` and friends: parameters are not tracked
    let name = match base.split_once('(') {
        Some((name, params)) if params.ends_with(')') => name.trim(),
        Some(_) => {
            return Err(Error::malformed_type(
                type_str,
                "unexpected characters after closing ')'",
            ))
        }
        None => base,
    };

    if name.is_empty() || name.contains(['<', '>', '(', ')']) {
        return Err(Error::malformed_type(type_str, "missing type name"));
    }

    let Some(ty) = PrimitiveType::from_name(name) else {
        return Err(Error::unsupported_type(name));
    };

    if !content.is_empty() || type_str.contains('<') {
        return Err(Error::malformed_type(
            type_str,
            format!("primitive type `{name}` does not take type parameters"),
        ));
    }

    Ok(Type::Primitive(ty))
}
