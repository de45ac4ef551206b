use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use serde_json::Value;

use crate::modules::helpers::handlebars::format_date::check_param_count;

/// # points formatting helper
/// points come either as api strings ("284", "12.5") or as computed floats.
/// whole numbers render without the trailing fraction.
///
/// ### usage
/// ```handlebars
/// {{formatPoints standing.points}}
/// ```
#[derive(Clone, Copy)]
pub struct FormatPointsHelper;

impl HelperDef for FormatPointsHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let points_param = helper.param(0);

        if points_param.is_none() {
            return Ok(());
        }

        let value = points_param.unwrap().value().clone();
        let points = match &value {
            Value::Number(number) => number.as_f64(),
            Value::String(raw) => raw.parse::<f64>().ok(),
            _ => None,
        };

        match points {
            Some(points) if points.fract() == 0.0 => out.write(&format!("{points:.0}"))?,
            Some(points) => out.write(&points.to_string())?,
            None => {}
        }

        Ok(())
    }
}
