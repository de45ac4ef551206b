use chrono::NaiveDate;
use rocket_dyn_templates::handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};

/// # race date formatting helper
///
/// ### usage
/// ```handlebars
/// {{formatDate race.date}}
/// ```
#[derive(Clone, Copy)]
pub struct FormatDateHelper;

impl HelperDef for FormatDateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        helper: &Helper,
        _: &Handlebars,
        _: &Context,
        _: &mut RenderContext,
        out: &mut dyn Output,
    ) -> HelperResult {
        check_param_count(helper, 1)?;
        let date_param = helper.param(0);

        if date_param.is_none() || date_param.unwrap().value().is_null() {
            return Ok(());
        }

        let date: NaiveDate = serde_json::from_value(date_param.unwrap().value().clone())
            .map_err(|error| RenderError::new::<String>(format!("invalid date: {error}")))?;
        out.write(&format!("{}", date.format("%e %B %Y")))?;

        Ok(())
    }
}

pub fn check_param_count(h: &Helper, n: u64) -> Result<(), RenderError> {
    if h.params().len() != n as usize {
        return Err(RenderError::new::<String>(format!(
            "Wrong number of arguments for helper \"{}\", {n} was expected but {} were given",
            h.name(),
            h.params().len()
        )));
    }

    Ok(())
}
