//! Teaching page (`teaching.html`).

use folio_content::{Course, MentoringCategory, RoleGroup, StudentMentee, TeachingContent};
use minijinja::context;

use super::{fragment, Page, PageKind, RenderError};
use crate::templates::TemplateEngine;

impl Page for TeachingContent {
    const KIND: PageKind = PageKind::Teaching;
}

pub fn course(engine: &TemplateEngine, course: &Course) -> Result<String, RenderError> {
    fragment(engine, "fragments/course.html", context! { course })
}

/// A teaching role: its course list, description and meta line.
pub fn role(engine: &TemplateEngine, role: &RoleGroup) -> Result<String, RenderError> {
    fragment(engine, "fragments/role.html", context! { role })
}

pub fn student(engine: &TemplateEngine, student: &StudentMentee) -> Result<String, RenderError> {
    fragment(engine, "fragments/student.html", context! { student })
}

pub fn mentoring(engine: &TemplateEngine, category: &MentoringCategory) -> Result<String, RenderError> {
    fragment(engine, "fragments/mentoring.html", context! { category })
}
