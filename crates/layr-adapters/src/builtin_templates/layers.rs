//! Layer templates: model, handler, repository, use-case.
//!
//! Every body is assembled from shared sections. Only the method bodies
//! differ between the stub flavor (single component) and the slice flavor
//! (module), so the two can never drift apart on type names, interfaces or
//! routes.

use std::fmt::Write;

use layr_core::domain::{
    ArtifactKind, Flavor, IMPORT_PATH_MARKER,
    capabilities::{
        CRUD_OPERATIONS, Collaborator, CrudOperation, OperationDef, OperationInput,
        OperationOutput, find_layer,
    },
};

/// Go-level shape of a layer that the domain registry does not carry.
struct GoType {
    /// Appended to `{{.Name}}` to form the struct name.
    suffix: &'static str,
    receiver: &'static str,
}

fn go_type(artifact: ArtifactKind) -> GoType {
    let (suffix, receiver) = match artifact {
        ArtifactKind::Model => ("", "m"),
        ArtifactKind::Handler => ("Handler", "h"),
        ArtifactKind::Repository => ("Repository", "r"),
        ArtifactKind::UseCase => ("Usecase", "u"),
    };
    GoType { suffix, receiver }
}

/// Body of a layer template, `None` for combinations no generator asks for.
pub(crate) fn body(artifact: ArtifactKind, flavor: Flavor) -> Option<String> {
    match (artifact, flavor) {
        (ArtifactKind::Model, Flavor::Slice) => Some(MODEL.to_owned()),
        (ArtifactKind::Model, Flavor::Stub) => None,
        (ArtifactKind::Handler, _) => Some(handler(flavor)),
        (ArtifactKind::Repository, _) => Some(repository(flavor)),
        (ArtifactKind::UseCase, _) => Some(usecase(flavor)),
    }
}

const MODEL: &str = r#"package entity

import "time"

// {{.Name}} is the record persisted by the {{.LowerName}} module.
type {{.Name}} struct {
	ID        uint      `json:"id" gorm:"primaryKey"`
	CreatedAt time.Time `json:"created_at"`
	UpdatedAt time.Time `json:"updated_at"`
}
"#;

// ── Shared sections ──────────────────────────────────────────────────────────

fn entity_import() -> String {
    format!("{IMPORT_PATH_MARKER}/internal/entity")
}

/// Package clause plus grouped imports; an empty group is skipped.
fn header(artifact: ArtifactKind, groups: &[&[&str]]) -> String {
    let mut out = format!("package {}\n\nimport (\n", find_layer(artifact).package);
    let mut first = true;
    for group in groups.iter().filter(|g| !g.is_empty()) {
        if !first {
            out.push('\n');
        }
        first = false;
        for import in *group {
            let _ = writeln!(out, "\t\"{import}\"");
        }
    }
    out.push_str(")\n");
    out
}

fn params(op: &OperationDef) -> &'static str {
    match op.input {
        OperationInput::Nothing => "()",
        OperationInput::Id => "(id uint)",
        OperationInput::Entity => "({{.LowerName}} *entity.{{.Name}})",
    }
}

fn results(op: &OperationDef) -> &'static str {
    match op.output {
        OperationOutput::Many => "([]entity.{{.Name}}, error)",
        OperationOutput::One => "(*entity.{{.Name}}, error)",
        OperationOutput::Nothing => "error",
    }
}

/// `GetByID(id uint) (*entity.Order, error)`
fn signature(op: &OperationDef) -> String {
    format!("{}{} {}", op.method, params(op), results(op))
}

/// The narrow interface a layer declares for the layer it calls into.
fn collaborator_interface(collaborator: Collaborator) -> String {
    let mut out = format!(
        "\n// {{{{.Name}}}}{suffix} is what this layer needs from the next one.\ntype {{{{.Name}}}}{suffix} interface {{\n",
        suffix = collaborator.interface_suffix
    );
    for op in CRUD_OPERATIONS {
        let _ = writeln!(out, "\t{}", signature(op));
    }
    out.push_str("}\n");
    out
}

/// The single struct field: the collaborator, or the database handle for
/// the layer at the bottom of the stack.
fn struct_field(artifact: ArtifactKind) -> (&'static str, String) {
    match find_layer(artifact).collaborator {
        Some(c) => (c.field, format!("{{{{.Name}}}}{}", c.interface_suffix)),
        None => ("db", "*gorm.DB".to_owned()),
    }
}

/// Struct declaration plus `New<Type>` constructor.
fn struct_and_constructor(artifact: ArtifactKind) -> String {
    let (field, field_type) = struct_field(artifact);
    let name = format!("{{{{.Name}}}}{}", go_type(artifact).suffix);

    format!(
        "type {name} struct {{\n\t{field} {field_type}\n}}\n\n\
         func New{name}({field} {field_type}) *{name} {{\n\treturn &{name}{{\n\t\t{field}: {field},\n\t}}\n}}\n"
    )
}

fn method(artifact: ArtifactKind, signature: &str, body: &str) -> String {
    let ty = go_type(artifact);
    format!(
        "\nfunc ({recv} *{{{{.Name}}}}{suffix}) {signature} {{\n{body}}}\n",
        recv = ty.receiver,
        suffix = ty.suffix
    )
}

/// `errors.New` stub shared by the repository and use-case stubs.
fn not_implemented(op: &OperationDef) -> String {
    let err = format!("errors.New(\"{{{{.LowerName}}}}: {} not implemented\")", op.method);
    match op.output {
        OperationOutput::Many | OperationOutput::One => format!("\treturn nil, {err}\n"),
        OperationOutput::Nothing => format!("\treturn {err}\n"),
    }
}

// ── Handler ──────────────────────────────────────────────────────────────────

const HANDLER_SIGNATURE: &str = "(w http.ResponseWriter, r *http.Request)";

const PARSE_ID: &str = "\tid, err := strconv.ParseUint(mux.Vars(r)[\"id\"], 10, 32)
\tif err != nil {
\t\thttp.Error(w, \"invalid id\", http.StatusBadRequest)
\t\treturn
\t}
";

const DECODE_ITEM: &str = "\tvar item entity.{{.Name}}
\tif err := json.NewDecoder(r.Body).Decode(&item); err != nil {
\t\thttp.Error(w, err.Error(), http.StatusBadRequest)
\t\treturn
\t}
";

const SERVER_ERROR: &str = "\tif err != nil {
\t\thttp.Error(w, err.Error(), http.StatusInternalServerError)
\t\treturn
\t}
";

const WRITE_JSON: &str = r#"
func (h *{{.Name}}Handler) writeJSON(w http.ResponseWriter, status int, v any) {
	w.Header().Set("Content-Type", "application/json")
	w.WriteHeader(status)
	_ = json.NewEncoder(w).Encode(v)
}
"#;

fn route_registration() -> String {
    let mut out = String::from(
        "\n// RegisterRoutes mounts the /{{.LowerName}}s routes on r.\n\
         func (h *{{.Name}}Handler) RegisterRoutes(r *mux.Router) {\n",
    );
    for op in CRUD_OPERATIONS {
        let path = if op.by_id {
            "/{{.LowerName}}s/{id}"
        } else {
            "/{{.LowerName}}s"
        };
        let _ = writeln!(
            out,
            "\tr.HandleFunc(\"{path}\", h.{}).Methods(\"{}\")",
            op.method, op.http_method
        );
    }
    out.push_str("}\n");
    out
}

fn handler_call(op: &OperationDef) -> String {
    let args = match op.input {
        OperationInput::Nothing => "",
        OperationInput::Id => "uint(id)",
        OperationInput::Entity => "&item",
    };
    format!("h.usecase.{}({args})", op.method)
}

fn handler_slice_body(op: &OperationDef) -> String {
    let mut body = String::new();
    if op.by_id {
        body.push_str(PARSE_ID);
    }
    if op.input == OperationInput::Entity {
        body.push_str(DECODE_ITEM);
        if op.by_id {
            body.push_str("\titem.ID = uint(id)\n");
        }
    }

    let status = op.success_status;
    match op.output {
        OperationOutput::Many | OperationOutput::One => {
            let var = if op.output == OperationOutput::Many {
                "items"
            } else {
                "item"
            };
            let _ = writeln!(body, "\t{var}, err := {}", handler_call(op));
            body.push_str(SERVER_ERROR);
            let _ = writeln!(body, "\th.writeJSON(w, http.{status}, {var})");
        }
        OperationOutput::Nothing => {
            let _ = writeln!(body, "\tif err := {}; err != nil {{", handler_call(op));
            body.push_str(
                "\t\thttp.Error(w, err.Error(), http.StatusInternalServerError)\n\t\treturn\n\t}\n",
            );
            if op.input == OperationInput::Entity {
                let _ = writeln!(body, "\th.writeJSON(w, http.{status}, item)");
            } else {
                let _ = writeln!(body, "\tw.WriteHeader(http.{status})");
            }
        }
    }
    body
}

fn handler(flavor: Flavor) -> String {
    let artifact = ArtifactKind::Handler;
    let entity = entity_import();
    let mut out = match flavor {
        Flavor::Slice => header(
            artifact,
            &[
                &["encoding/json", "net/http", "strconv"],
                &["github.com/gorilla/mux"],
                &[&entity],
            ],
        ),
        Flavor::Stub => header(
            artifact,
            &[&["net/http"], &["github.com/gorilla/mux"], &[&entity]],
        ),
    };

    if let Some(collaborator) = find_layer(artifact).collaborator {
        out.push_str(&collaborator_interface(collaborator));
    }
    out.push_str("\n// {{.Name}}Handler serves the /{{.LowerName}}s routes.\n");
    out.push_str(&struct_and_constructor(artifact));
    out.push_str(&route_registration());

    for op in CRUD_OPERATIONS {
        let body = match flavor {
            Flavor::Slice => handler_slice_body(op),
            Flavor::Stub => {
                "\thttp.Error(w, \"not implemented\", http.StatusNotImplemented)\n".to_owned()
            }
        };
        out.push_str(&method(
            artifact,
            &format!("{}{HANDLER_SIGNATURE}", op.method),
            &body,
        ));
    }

    if flavor == Flavor::Slice {
        out.push_str(WRITE_JSON);
    }
    out
}

// ── Repository ───────────────────────────────────────────────────────────────

fn repository_slice_body(op: &OperationDef) -> String {
    match op.operation {
        CrudOperation::List => "\tvar items []entity.{{.Name}}
\tif err := r.db.Find(&items).Error; err != nil {
\t\treturn nil, err
\t}
\treturn items, nil
"
        .to_owned(),
        CrudOperation::Get => "\tvar item entity.{{.Name}}
\tif err := r.db.First(&item, id).Error; err != nil {
\t\treturn nil, err
\t}
\treturn &item, nil
"
        .to_owned(),
        CrudOperation::Create => "\treturn r.db.Create({{.LowerName}}).Error\n".to_owned(),
        CrudOperation::Update => "\treturn r.db.Save({{.LowerName}}).Error\n".to_owned(),
        CrudOperation::Delete => "\treturn r.db.Delete(&entity.{{.Name}}{}, id).Error\n".to_owned(),
    }
}

fn repository(flavor: Flavor) -> String {
    let artifact = ArtifactKind::Repository;
    let entity = entity_import();
    let std: &[&str] = match flavor {
        Flavor::Slice => &[],
        Flavor::Stub => &["errors"],
    };
    let mut out = header(artifact, &[std, &["gorm.io/gorm"], &[&entity]]);

    out.push_str("\n// {{.Name}}Repository persists entity.{{.Name}} records.\n");
    out.push_str(&struct_and_constructor(artifact));

    for op in CRUD_OPERATIONS {
        let body = match flavor {
            Flavor::Slice => repository_slice_body(op),
            Flavor::Stub => not_implemented(op),
        };
        out.push_str(&method(artifact, &signature(op), &body));
    }
    out
}

// ── Use-case ─────────────────────────────────────────────────────────────────

fn usecase_slice_body(op: &OperationDef) -> String {
    let arg = match op.input {
        OperationInput::Nothing => "",
        OperationInput::Id => "id",
        OperationInput::Entity => "{{.LowerName}}",
    };
    let mut body = String::new();
    if op.input == OperationInput::Entity {
        body.push_str(
            "\tif err := u.validate({{.LowerName}}); err != nil {\n\t\treturn err\n\t}\n",
        );
    }
    let _ = writeln!(body, "\treturn u.repo.{}({arg})", op.method);
    body
}

const VALIDATE: &str = r#"
// validate runs before every create and update. Add business rules here.
func (u *{{.Name}}Usecase) validate({{.LowerName}} *entity.{{.Name}}) error {
	return nil
}
"#;

fn usecase(flavor: Flavor) -> String {
    let artifact = ArtifactKind::UseCase;
    let entity = entity_import();
    let std: &[&str] = match flavor {
        Flavor::Slice => &[],
        Flavor::Stub => &["errors"],
    };
    let mut out = header(artifact, &[std, &[&entity]]);

    if let Some(collaborator) = find_layer(artifact).collaborator {
        out.push_str(&collaborator_interface(collaborator));
    }
    out.push_str("\n// {{.Name}}Usecase holds the business rules for entity.{{.Name}}.\n");
    out.push_str(&struct_and_constructor(artifact));

    for op in CRUD_OPERATIONS {
        let body = match flavor {
            Flavor::Slice => usecase_slice_body(op),
            Flavor::Stub => not_implemented(op),
        };
        out.push_str(&method(artifact, &signature(op), &body));
    }

    if flavor == Flavor::Slice {
        out.push_str(VALIDATE);
    }
    out
}
