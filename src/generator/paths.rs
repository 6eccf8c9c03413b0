//! Output path resolution for catalog templates.
//!
//! Template identifiers are paths relative to the template root, for example
//! `src/main/java/adapters/datasources/xxx/model/XxxEntity.java.j2`.
//!
//! Java sources land under
//! `<output>/<company>/<project>/src/main/java/<package path>/<relative path>`,
//! where the relative path has every `xxx` replaced by `table` and every `Xxx`
//! by `Table`. Resource templates (any identifier containing
//! `application.properties`) land under `<output>/<company>/<project>/src/main/resources/`
//! and are never substituted.
//!
//! Substitution is plain, case-sensitive substring replacement over the whole
//! relative path, `xxx` first and `Xxx` second. A table name that itself
//! contains `Xxx` is therefore rewritten again by the second pass.

use std::path::{Path, PathBuf};

use super::descriptor::EntityDescriptor;

/// Directory prefix of Java source templates
pub const JAVA_SOURCE_ROOT: &str = "src/main/java";
/// Directory prefix of resource templates
pub const RESOURCE_ROOT: &str = "src/main/resources";
/// Extension carried by every template asset
pub const TEMPLATE_SUFFIX: &str = ".j2";
/// Path token replaced by the camelCase entity name
pub const TABLE_TOKEN: &str = "xxx";
/// Path token replaced by the PascalCase entity name
pub const ENTITY_TOKEN: &str = "Xxx";

const RESOURCE_MARKER: &str = "application.properties";

/// Whether a template is a resource file rather than a Java source
#[must_use]
pub fn is_resource_template(template: &str) -> bool {
    template.contains(RESOURCE_MARKER)
}

/// Normalise a template argument to an identifier relative to `template_root`
///
/// Accepts either an identifier or a path that starts with the template root.
#[must_use]
pub fn template_identifier(template_root: &Path, template: &str) -> String {
    let relative = Path::new(template)
        .strip_prefix(template_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| PathBuf::from(template));
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Replace the entity tokens in a template-relative path
#[must_use]
pub fn substitute_tokens(relative: &str, table: &str, entity_name: &str) -> String {
    relative
        .replace(TABLE_TOKEN, table)
        .replace(ENTITY_TOKEN, entity_name)
}

fn strip_template_parts<'a>(template: &'a str, root: &str) -> &'a str {
    let without_root = template
        .strip_prefix(root)
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(template);
    without_root
        .strip_suffix(TEMPLATE_SUFFIX)
        .unwrap_or(without_root)
}

fn push_segments(path: &mut PathBuf, relative: &str) {
    for segment in relative.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
}

/// Root of the generated project for `descriptor`: `<output>/<company>/<project>`
#[must_use]
pub fn project_root(output_root: &Path, descriptor: &EntityDescriptor) -> PathBuf {
    output_root
        .join(&descriptor.company.lowercase)
        .join(&descriptor.project.lowercase)
}

/// File written by rendering `template` against `descriptor`
#[must_use]
pub fn resolve_output_path(
    output_root: &Path,
    template: &str,
    descriptor: &EntityDescriptor,
) -> PathBuf {
    let mut path = project_root(output_root, descriptor);
    if is_resource_template(template) {
        push_segments(&mut path, RESOURCE_ROOT);
        push_segments(&mut path, strip_template_parts(template, RESOURCE_ROOT));
    } else {
        let relative = strip_template_parts(template, JAVA_SOURCE_ROOT);
        push_segments(&mut path, JAVA_SOURCE_ROOT);
        for segment in descriptor.package_segments() {
            path.push(segment);
        }
        push_segments(
            &mut path,
            &substitute_tokens(relative, &descriptor.table, &descriptor.entity_name),
        );
    }
    path
}
