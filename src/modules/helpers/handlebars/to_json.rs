use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};

use crate::modules::helpers::handlebars::format_date::check_param_count;

/// # json embedding helper
/// serializes template data back to json for use by the chart script
///
/// ### usage
/// ```handlebars
/// {{toJson chart}}
/// ```
#[derive(Clone, Copy)]
pub struct ToJsonHelper;

impl HelperDef for ToJsonHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let json_param = helper.param(0);

        if json_param.is_none() {
            return Ok(());
        }

        out.write(json_param.unwrap().value().to_string().as_str())?;
        Ok(())
    }
}
