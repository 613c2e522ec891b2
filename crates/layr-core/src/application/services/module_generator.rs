//! Vertical slice (`layr module <name>`): model, handler, repository, use-case.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::services::TemplateEngine,
    domain::{
        ArtifactKind, ArtifactPlan, DomainValidator, Flavor, NameForm, RenderContext, TemplateKey,
        capabilities::find_layer,
    },
    error::LayrResult,
};

/// Plans the four slice-flavor artifacts of one entity.
///
/// All four are rendered from a single [`NameForm`], which is what makes
/// `entity.Order` in the handler match `type Order struct` in the model.
pub struct ModuleGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ModuleGenerator<'a> {
    pub fn new(engine: TemplateEngine<'a>) -> Self {
        Self { engine }
    }

    /// Plan the slice in [`ArtifactKind::SLICE_ORDER`].
    #[instrument(skip_all, fields(name = name, import_path = import_path))]
    pub fn plan(&self, name: &str, import_path: &str, root: &Path) -> LayrResult<ArtifactPlan> {
        DomainValidator::validate_name(name)?;

        let name = NameForm::derive(name);
        let context = RenderContext::new(name.clone()).with_import_path(import_path);
        let mut plan = ArtifactPlan::new(root);

        for artifact in ArtifactKind::SLICE_ORDER {
            let path = find_layer(artifact).slice_path(&name);
            let key = TemplateKey::layer(artifact, Flavor::Slice);
            let content = self.engine.render(key, &context, &path)?;
            plan.add_file(path, content);
        }

        debug!(files = plan.files().len(), "module planned");
        Ok(plan)
    }
}
