use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use substring::Substring;

use crate::modules::helpers::handlebars::format_date::check_param_count;

/// # driver initials helper
/// the two-letter badge shown where no headshot is available
///
/// ### usage
/// ```handlebars
/// {{driverInitials driver.given_name driver.family_name}}
/// ```
#[derive(Clone, Copy)]
pub struct DriverInitialsHelper;

impl HelperDef for DriverInitialsHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 2)?;

        for param in helper.params() {
            if let Some(name) = param.value().as_str() {
                out.write(&name.substring(0, 1).to_uppercase())?;
            }
        }

        Ok(())
    }
}
