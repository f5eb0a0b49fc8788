//! Terminal-friendly text rendering of a report view.
//!
//! Handlebars with strict mode off, so an absent optional sub-section
//! simply renders nothing. One custom helper: `join` for string lists.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use thiserror::Error;

use crate::ReportView;

#[derive(Debug, Error)]
pub enum TextRenderError {
    #[error("Template error: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
}

const REPORT_TEMPLATE: &str = "\
== Use Case Classification ==
Primary Category: {{classification.primary_category}}
Task Type: {{classification.task_type}}
Complexity: {{classification.complexity_level}}

== Recommended Models ==
{{#each models}}
* {{model_name}} ({{confidence}} confidence)
  Reasons: {{join reasons \", \"}}
{{#if performance}}
  Performance: accuracy {{performance.accuracy}}, latency {{performance.latency}}, throughput {{performance.throughput}}
{{/if}}
{{/each}}

== Infrastructure Requirements ==
{{#each infrastructure}}
- {{label}}: {{value}}
{{/each}}

== Pricing Estimates ==
${{pricing.hourly_cost}}/hour, ${{pricing.monthly_estimated_cost}}/month on {{pricing.aws_instance_type}}
Notes: {{join pricing.notes \"; \"}}

== Risk Assessment ==
{{#each risks}}
! {{risk}} (impact: {{impact}}) mitigation: {{mitigation}}
{{/each}}
";

pub struct TextRenderer {
    handlebars: Handlebars<'static>,
}

impl TextRenderer {
    pub fn new() -> Result<Self, TextRenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_helper("join", Box::new(JoinHelper));
        handlebars
            .register_template_string("report", REPORT_TEMPLATE)
            .map_err(|e| TextRenderError::Template(e.to_string()))?;
        Ok(Self { handlebars })
    }

    pub fn render(&self, view: &ReportView) -> Result<String, TextRenderError> {
        self.handlebars
            .render("report", view)
            .map_err(|e| TextRenderError::Render(e.to_string()))
    }
}

/// Join an array with a separator
struct JoinHelper;

impl HelperDef for JoinHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let array = h.param(0).and_then(|v| v.value().as_array());
        let separator = h.param(1).and_then(|v| v.value().as_str()).unwrap_or(", ");

        if let Some(arr) = array {
            let strings: Vec<String> = arr
                .iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect();
            out.write(&strings.join(separator))?;
        }
        Ok(())
    }
}
