//! Single layer artifact (`layr generate <kind> <name>`).

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::services::TemplateEngine,
    domain::{
        ArtifactPlan, ComponentKind, DomainValidator, Flavor, NameForm, RenderContext, TemplateKey,
        capabilities::component_path,
    },
    error::LayrResult,
};

/// Plans exactly one stub-flavor artifact for a component kind.
pub struct ComponentGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ComponentGenerator<'a> {
    pub fn new(engine: TemplateEngine<'a>) -> Self {
        Self { engine }
    }

    /// Plan `<dir>/<lower>_<kind>.go` under `root`.
    ///
    /// The kind is parsed before anything else, so an unknown kind fails
    /// with nothing planned.
    #[instrument(skip_all, fields(kind = kind, name = name))]
    pub fn plan(
        &self,
        kind: &str,
        name: &str,
        import_path: &str,
        root: &Path,
    ) -> LayrResult<ArtifactPlan> {
        let kind: ComponentKind = kind.parse()?;
        DomainValidator::validate_name(name)?;

        let name = NameForm::derive(name);
        let context = RenderContext::new(name.clone()).with_import_path(import_path);
        let path = component_path(kind, &name);
        let key = TemplateKey::layer(kind.artifact(), Flavor::Stub);

        let content = self.engine.render(key, &context, &path)?;
        debug!(path = %path, "component planned");

        Ok(ArtifactPlan::new(root).with_file(path, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockTemplateRenderer, MockTemplateStore};
    use crate::domain::{ArtifactKind, DomainError, TemplateSpec};
    use crate::error::{ErrorKind, LayrError};

    fn echo_ports() -> (MockTemplateStore, MockTemplateRenderer) {
        let mut store = MockTemplateStore::new();
        store
            .expect_get()
            .returning(|key| Ok(TemplateSpec::new(key, key.to_string())));
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|spec, _| Ok(spec.body().to_owned()));
        (store, renderer)
    }

    #[test]
    fn plans_one_file_per_kind() {
        let (store, renderer) = echo_ports();
        let generator = ComponentGenerator::new(TemplateEngine::new(&store, &renderer));

        let cases = [
            ("controller", "internal/delivery/http/order_controller.go", "handler/stub"),
            ("Repository", "internal/repository/order_repository.go", "repository/stub"),
            ("USECASE", "internal/usecase/order_usecase.go", "usecase/stub"),
        ];

        for (kind, path, template) in cases {
            let plan = generator.plan(kind, "Order", "shop", Path::new(".")).unwrap();
            assert_eq!(plan.files().len(), 1);
            assert!(plan.directories().is_empty());
            assert_eq!(plan.files()[0].path.to_string(), path);
            assert_eq!(plan.files()[0].content, template);
        }
    }

    #[test]
    fn unknown_kind_never_reaches_templates() {
        let mut store = MockTemplateStore::new();
        store.expect_get().never();
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let generator = ComponentGenerator::new(TemplateEngine::new(&store, &renderer));
        let err = generator
            .plan("service", "order", "shop", Path::new("."))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(matches!(
            err,
            LayrError::Domain(DomainError::UnknownComponentKind { .. })
        ));
    }

    #[test]
    fn unsafe_name_is_rejected() {
        let (store, renderer) = echo_ports();
        let generator = ComponentGenerator::new(TemplateEngine::new(&store, &renderer));

        let err = generator
            .plan("controller", "../order", "shop", Path::new("."))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn renders_with_import_path_and_name() {
        let mut store = MockTemplateStore::new();
        store
            .expect_get()
            .withf(|key| *key == TemplateKey::layer(ArtifactKind::Handler, Flavor::Stub))
            .returning(|key| Ok(TemplateSpec::new(key, "")));
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|_, ctx| {
                ctx.import_path() == Some("shop") && ctx.name().capitalized() == "Order"
            })
            .times(1)
            .returning(|_, _| Ok(String::new()));

        let generator = ComponentGenerator::new(TemplateEngine::new(&store, &renderer));
        generator
            .plan("controller", "order", "shop", Path::new("."))
            .unwrap();
    }
}
