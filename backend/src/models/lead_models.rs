use diesel::prelude::*;
use serde::Serialize;
use crate::schema::demo_requests;
use crate::schema::newsletter_subscribers;

#[derive(Queryable, Selectable, Serialize, Debug, Clone)]
#[diesel(table_name = demo_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DemoRequest {
    pub id: i32,
    pub reference: String, // uuid handed back to the visitor
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub job_title: String,
    pub phone: Option<String>,
    pub country: String,
    pub email: String, // always lower-cased
    pub subscribe: bool,
    pub created_at: i32, // int timestamp utc epoch
}

#[derive(Insertable, Debug)]
#[diesel(table_name = demo_requests)]
pub struct NewDemoRequest {
    pub reference: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub job_title: String,
    pub phone: Option<String>,
    pub country: String,
    pub email: String,
    pub subscribe: bool,
    pub created_at: i32,
}

#[derive(Queryable, Selectable, Serialize, Debug, Clone)]
#[diesel(table_name = newsletter_subscribers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewsletterSubscriber {
    pub id: i32,
    pub email: String,
    pub source: String, // "footer" or "demo_form"
    pub created_at: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = newsletter_subscribers)]
pub struct NewNewsletterSubscriber<'a> {
    pub email: &'a str,
    pub source: &'a str,
    pub created_at: i32,
}

/// Where a newsletter subscription came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionSource {
    Footer,
    DemoForm,
}

impl SubscriptionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionSource::Footer => "footer",
            SubscriptionSource::DemoForm => "demo_form",
        }
    }
}
