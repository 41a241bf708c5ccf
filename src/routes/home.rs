use actix_web::{http::header::ContentType, HttpResponse};
use askama::Template;

use crate::{
    content::{NavItem, Project, StackGroup, WorkItem, NAV_ITEMS, PROJECTS, STACK_GROUPS, WORK_ITEMS},
    domain::{ContactForm, SubmissionStatus},
    relay::RECIPIENT_EMAIL,
    submission::SubmissionController,
    util::e500,
};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    nav_items: &'a [NavItem],
    stack_groups: &'a [StackGroup],
    projects: &'a [Project],
    work_items: &'a [WorkItem],
    recipient: &'a str,
    form: &'a ContactForm,
    status: SubmissionStatus,
    message: Option<&'a str>,
}

impl<'a> HomeTemplate<'a> {
    /// 以控制器当前的表单与状态渲染页面
    pub fn new(controller: &'a SubmissionController) -> Self {
        Self {
            nav_items: NAV_ITEMS,
            stack_groups: STACK_GROUPS,
            projects: PROJECTS,
            work_items: WORK_ITEMS,
            recipient: RECIPIENT_EMAIL,
            form: controller.form(),
            status: controller.status(),
            message: controller.message(),
        }
    }
}

pub async fn home() -> Result<HttpResponse, actix_web::Error> {
    let controller = SubmissionController::default();
    let body = HomeTemplate::new(&controller).render().map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
