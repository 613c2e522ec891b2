//! End-to-end generation through the real adapters.

use std::fs;
use std::path::{Path, PathBuf};

use layr_adapters::{InMemoryStore, LocalFilesystem, MemoryFilesystem, PlaceholderRenderer};
use layr_core::prelude::*;
use tempfile::TempDir;

fn memory_service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin()),
        Box::new(PlaceholderRenderer::new()),
        Box::new(fs.clone()),
    )
}

fn local_service(store: &InMemoryStore) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(store.clone()),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

fn files_under(fs: &MemoryFilesystem, root: &str) -> Vec<PathBuf> {
    fs.list_files()
        .into_iter()
        .filter(|p| p.starts_with(root))
        .collect()
}

// ── Components ───────────────────────────────────────────────────────────────

#[test]
fn every_component_kind_writes_one_file() {
    let cases = [
        ("Controller", "internal/delivery/http/order_controller.go"),
        ("REPOSITORY", "internal/repository/order_repository.go"),
        ("usecase", "internal/usecase/order_usecase.go"),
    ];

    for (kind, expected) in cases {
        let fs = MemoryFilesystem::new();
        let report = memory_service(&fs)
            .execute(&GenerationRequest::component(kind, "Order", "shop", "proj"))
            .unwrap();

        assert_eq!(report.files, [expected], "{kind}");
        assert_eq!(fs.list_files(), [Path::new("proj").join(expected)], "{kind}");
    }
}

#[test]
fn component_stub_references_project_entity() {
    let fs = MemoryFilesystem::new();
    memory_service(&fs)
        .execute(&GenerationRequest::component("usecase", "order", "shop", "proj"))
        .unwrap();

    let body = fs.read_file("proj/internal/usecase/order_usecase.go").unwrap();
    assert!(body.starts_with("package usecase\n"));
    assert!(body.contains("\"shop/internal/entity\""));
    assert!(body.contains("type OrderRepository interface {"));
    assert!(body.contains("errors.New(\"order: GetAll not implemented\")"));
}

#[test]
fn unknown_component_kind_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let err = memory_service(&fs)
        .execute(&GenerationRequest::component("service", "order", "shop", "proj"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(fs.list_files().is_empty());
    assert!(fs.list_directories().is_empty());
}

// ── Modules ──────────────────────────────────────────────────────────────────

#[test]
fn module_slice_is_consistent_across_layers() {
    let fs = MemoryFilesystem::new();
    let report = memory_service(&fs)
        .execute(&GenerationRequest::module("Order", "shop", "proj"))
        .unwrap();

    assert_eq!(
        report.files,
        [
            "internal/entity/order.go",
            "internal/delivery/http/order_handler.go",
            "internal/repository/order_repository.go",
            "internal/usecase/order_usecase.go",
        ]
    );

    let model = fs.read_file("proj/internal/entity/order.go").unwrap();
    assert!(model.contains("type Order struct {"));

    let handler = fs.read_file("proj/internal/delivery/http/order_handler.go").unwrap();
    assert!(handler.contains("r.HandleFunc(\"/orders\", h.GetAll)"));
    assert!(handler.contains("r.HandleFunc(\"/orders/{id}\", h.Update).Methods(\"PUT\")"));
    assert!(handler.contains("GetByID(id uint) (*entity.Order, error)"));

    let repo = fs.read_file("proj/internal/repository/order_repository.go").unwrap();
    assert!(repo.contains("func (r *OrderRepository) Create(order *entity.Order) error {"));

    let usecase = fs.read_file("proj/internal/usecase/order_usecase.go").unwrap();
    assert!(usecase.contains("func NewOrderUsecase(repo OrderRepository) *OrderUsecase {"));

    for path in fs.list_files() {
        let body = fs.read_file(&path).unwrap();
        assert!(!body.contains("{{"), "{}", path.display());
    }
}

#[test]
fn module_write_failure_keeps_existing_project_files() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("proj/internal/entity")).unwrap();
    fs.write_file(Path::new("proj/go.mod"), "module shop").unwrap();
    fs.fail_writes_to("proj/internal/repository/order_repository.go");

    let err = memory_service(&fs)
        .execute(&GenerationRequest::module("order", "shop", "proj"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(fs.list_files(), [PathBuf::from("proj/go.mod")]);
    assert!(fs.exists(Path::new("proj/internal/entity")));
    assert!(!fs.exists(Path::new("proj/internal/delivery")));
}

// ── Projects ─────────────────────────────────────────────────────────────────

#[test]
fn mysql_project_on_disk() {
    let tmp = TempDir::new().unwrap();
    let report = local_service(&InMemoryStore::with_builtin())
        .execute(&GenerationRequest::project("shop", DatabaseKind::MySql, tmp.path()))
        .unwrap();

    let root = tmp.path().join("shop");
    assert_eq!(report.root, root);

    for dir in [
        "cmd",
        "internal/delivery/http",
        "internal/repository",
        "internal/usecase",
        "internal/entity",
        "pkg/database",
        "pkg/middleware",
    ] {
        assert!(root.join(dir).is_dir(), "{dir}");
    }

    let db = fs::read_to_string(root.join("pkg/database/db.go")).unwrap();
    assert!(db.contains("@tcp(%s:%s)/%s?charset=utf8mb4&parseTime=True&loc=Local"));

    let go_mod = fs::read_to_string(root.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module shop\n"));
    assert!(go_mod.contains("gorm.io/driver/mysql"));

    for file in [
        "internal/entity/defaultmodule.go",
        "internal/delivery/http/defaultmodule_handler.go",
        "internal/repository/defaultmodule_repository.go",
        "internal/usecase/defaultmodule_usecase.go",
    ] {
        assert!(root.join(file).is_file(), "{file}");
    }

    let env = fs::read_to_string(root.join(".env")).unwrap();
    assert_eq!(env, fs::read_to_string(root.join(".env.example")).unwrap());
    assert!(env.contains("DB_PORT=3306"));
}

#[test]
fn project_write_failure_removes_new_root_and_missing_parents() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_to("out/shop/Makefile");

    let err = memory_service(&fs)
        .execute(&GenerationRequest::project("shop", DatabaseKind::Postgres, "out"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("Makefile"));
    assert!(files_under(&fs, "out/shop").is_empty());
    assert!(!fs.exists(Path::new("out/shop")));
    assert!(!fs.exists(Path::new("out")));
}

#[test]
fn template_failure_leaves_disk_untouched() {
    let tmp = TempDir::new().unwrap();
    let store = InMemoryStore::with_builtin();
    store.insert(TemplateSpec::new(
        TemplateKey::Project(ProjectFile::Readme),
        "# {{.Name",
    ));

    let err = local_service(&store)
        .execute(&GenerationRequest::project("shop", DatabaseKind::Postgres, tmp.path()))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Template);
    assert!(err.to_string().contains("render README.md"));
    assert!(!tmp.path().join("shop").exists());
}

// ── Overwrite and preview ────────────────────────────────────────────────────

#[test]
fn regenerating_component_overwrites_in_place() {
    let tmp = TempDir::new().unwrap();
    let store = InMemoryStore::with_builtin();
    let service = local_service(&store);
    let request = GenerationRequest::component("controller", "order", "shop", tmp.path());

    service.execute(&request).unwrap();

    let key = TemplateKey::layer(ArtifactKind::Handler, Flavor::Stub);
    store.insert(TemplateSpec::new(key, "package http // {{.Name}} v2\n"));
    service.execute(&request).unwrap();

    let dir = tmp.path().join("internal/delivery/http");
    let entries: Vec<_> = fs::read_dir(&dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        fs::read_to_string(dir.join("order_controller.go")).unwrap(),
        "package http // Order v2\n"
    );
}

#[test]
fn preview_touches_nothing() {
    let fs = MemoryFilesystem::new();
    let report = memory_service(&fs)
        .preview(&GenerationRequest::project("shop", DatabaseKind::Postgres, "out"))
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.directories.len(), 7);
    assert_eq!(report.files.len(), 14);
    assert!(fs.list_files().is_empty());
    assert!(fs.list_directories().is_empty());
}
