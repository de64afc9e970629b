//! Jobs list acceptance tests against a mock Nomad agent.
//!
//! Covers ordering, pagination, search, row contents and links, empty states,
//! namespace scoping, and the not-authorized flow through token entry.

mod common;
mod helpers;

use common::*;
use helpers::{enter_key, esc_key, key};
use nomad_client::{JobStatus, JobType};

#[tokio::test]
async fn test_jobs_are_sorted_by_modify_index() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create_list(8, |job| job);
    let expected: Vec<String> = jobs
        .sorted_by_modify_index_desc()
        .into_iter()
        .map(|job| job.name)
        .collect();
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;

    assert_eq!(page.job_names(), expected);
}

#[tokio::test]
async fn test_page_size_limits_rows() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create_list(12, |job| job);
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    assert_eq!(page.jobs().len(), 10);

    page.next_page().await;
    assert_eq!(page.jobs().len(), 2);
    assert_eq!(page.current_url(), "/jobs?page=2");

    page.prev_page().await;
    assert_eq!(page.jobs().len(), 10);
    assert_eq!(page.current_url(), "/jobs");
}

#[tokio::test]
async fn test_row_shows_job_attributes_and_link() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    let job = jobs.create(|job| {
        job.id("nightly")
            .name("nightly")
            .job_type(JobType::Batch)
            .periodic(true)
            .status(JobStatus::Pending)
            .priority(70)
            .task_groups(["fetch", "report"])
    });
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;

    let rows = page.jobs();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.name, job.name);
    assert_eq!(row.link, "/ui/jobs/nightly");
    assert_eq!(row.status, JobStatus::Pending);
    assert_eq!(row.job_type, "periodic");
    assert_eq!(row.priority, 70);
    assert_eq!(row.task_groups, 2);
}

#[tokio::test]
async fn test_clicking_a_job_opens_its_detail() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create_list(3, |job| job);
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    let second = page.jobs()[1].id.clone();

    page.click_job(1).await;
    assert_eq!(page.current_url(), format!("/jobs/{second}"));
    assert!(page.rendered_text(100, 30).contains(&second));

    page.press(esc_key()).await;
    assert_eq!(page.current_url(), "/jobs");
}

#[tokio::test]
async fn test_run_job_navigates() {
    let mut ctx = TestContext::new().await;
    ctx.serve(JobSet::new());

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    page.run_job().await;

    assert_eq!(page.current_url(), "/jobs/run");
}

#[tokio::test]
async fn test_search_resets_pagination() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create_list(12, |job| job);
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    page.next_page().await;
    assert_eq!(page.current_url(), "/jobs?page=2");

    page.search("foobar").await;
    assert_eq!(page.current_url(), "/jobs?search=foobar");
}

#[tokio::test]
async fn test_search_matches_names() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create(|job| job.name("web-frontend"));
    jobs.create(|job| job.name("web-backend"));
    jobs.create(|job| job.name("cache"));
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    page.search("WEB").await;

    let mut names = page.job_names();
    names.sort();
    assert_eq!(names, vec!["web-backend", "web-frontend"]);
}

#[tokio::test]
async fn test_empty_cluster_shows_no_jobs() {
    let mut ctx = TestContext::new().await;
    ctx.serve(JobSet::new());

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;

    assert!(page.is_empty());
    assert_eq!(page.empty_headline(), Some("No Jobs"));
    assert!(page.rendered_text(100, 30).contains("No Jobs"));
}

#[tokio::test]
async fn test_unmatched_search_shows_no_matches() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create_list(3, |job| job);
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    page.search("foobar").await;

    assert!(page.is_empty());
    assert_eq!(page.empty_headline(), Some("No Matches"));
    assert!(
        page.rendered_text(100, 30)
            .contains("No jobs match the term \"foobar\".")
    );
}

#[tokio::test]
async fn test_namespace_param_scopes_jobs() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create(|job| job.id("prod-api").name("prod-api").namespace("prod"));
    jobs.create(|job| job.id("default-api").name("default-api"));
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs?namespace=prod").await;
    assert_eq!(page.job_names(), vec!["prod-api"]);
    assert_eq!(page.current_url(), "/jobs?namespace=prod");

    page.visit("/jobs").await;
    assert_eq!(page.job_names(), vec!["default-api"]);
}

#[tokio::test]
async fn test_child_jobs_are_hidden() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create(|job| job.id("report").name("report").periodic(true));
    jobs.create(|job| {
        job.id("report/periodic-1700000000")
            .name("report/periodic-1700000000")
            .parent("report")
    });
    ctx.serve(jobs);

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    assert_eq!(page.job_names(), vec!["report"]);
}

#[tokio::test]
async fn test_forbidden_shows_not_authorized_and_recovers_with_token() {
    let mut ctx = TestContext::new().await;
    let mut jobs = JobSet::new();
    jobs.create_list(2, |job| job);
    ctx.serve(jobs);
    ctx.require_token("s3cret-token");

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    assert_eq!(page.error_title(), Some("Not Authorized"));
    assert!(page.jobs().is_empty());
    assert!(page.app().toasts.is_empty());

    let screen = page.rendered_text(100, 30);
    assert!(screen.contains("Not Authorized"));
    assert!(screen.contains("/ui/settings/tokens"));

    page.seek_help().await;
    assert_eq!(page.current_url(), "/settings/tokens");

    for c in "s3cret-token".chars() {
        page.press(key(c)).await;
    }
    page.press(enter_key()).await;

    assert_eq!(page.current_url(), "/jobs");
    assert!(page.app().connection.has_token);
    assert_eq!(page.error_title(), None);
    assert_eq!(page.jobs().len(), 2);
}

#[tokio::test]
async fn test_wrong_token_stays_not_authorized() {
    let mut ctx = TestContext::new().await;
    ctx.serve(JobSet::new());
    ctx.require_token("right");

    let mut page = ctx.jobs_page();
    page.visit("/settings/tokens").await;
    for c in "wrong".chars() {
        page.press(key(c)).await;
    }
    page.press(enter_key()).await;

    assert_eq!(page.current_url(), "/jobs");
    assert_eq!(page.error_title(), Some("Not Authorized"));

    // Enter on the error panel follows the remediation as well.
    page.press(enter_key()).await;
    assert_eq!(page.current_url(), "/settings/tokens");
}

#[tokio::test]
async fn test_server_error_is_not_an_empty_state() {
    let mut ctx = TestContext::new().await;
    ctx.server.reset().await;
    Mock::given(wiremock::matchers::path("/v1/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&ctx.server)
        .await;

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;

    assert_eq!(page.error_title(), Some("Error"));
    assert!(!page.is_empty());
    assert_eq!(page.app().toasts.len(), 1);
}

#[tokio::test]
async fn test_quit_key_ends_the_loop() {
    let mut ctx = TestContext::new().await;
    ctx.serve(JobSet::new());

    let mut page = ctx.jobs_page();
    page.visit("/jobs").await;
    assert_eq!(page.press(key('q')).await, Flow::Quit);
}
