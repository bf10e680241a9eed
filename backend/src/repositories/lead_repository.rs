use diesel::prelude::*;
use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::{
    models::lead_models::{
        DemoRequest, NewDemoRequest, NewNewsletterSubscriber, NewsletterSubscriber,
        SubscriptionSource,
    },
    schema::{demo_requests, newsletter_subscribers},
    DbPool,
};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Query(#[from] DieselError),
}

/// Outcome of a newsletter signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    Created,
    AlreadySubscribed,
}

pub struct LeadRepository {
    pool: DbPool,
}

impl LeadRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Cheap round trip used by the health check.
    pub fn ping(&self) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get()?;
        diesel::sql_query("SELECT 1").execute(&mut conn)?;
        Ok(())
    }

    /// Stores a demo request and, when asked to, subscribes the same email in one transaction.
    pub fn record_demo_request(
        &self,
        new_request: NewDemoRequest,
        newsletter: Option<SubscriptionSource>,
    ) -> Result<DemoRequest, RepositoryError> {
        let mut conn = self.pool.get()?;
        let request = conn.transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(demo_requests::table)
                .values(&new_request)
                .execute(conn)?;

            if let Some(source) = newsletter {
                subscribe_on(conn, &new_request.email, source, new_request.created_at)?;
            }

            demo_requests::table
                .filter(demo_requests::reference.eq(&new_request.reference))
                .select(DemoRequest::as_select())
                .first(conn)
        })?;
        Ok(request)
    }

    // Newest first; id breaks ties inside the same second
    pub fn list_demo_requests(&self) -> Result<Vec<DemoRequest>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let requests = demo_requests::table
            .order((demo_requests::created_at.desc(), demo_requests::id.desc()))
            .select(DemoRequest::as_select())
            .load(&mut conn)?;
        Ok(requests)
    }

    pub fn subscribe(
        &self,
        email: &str,
        source: SubscriptionSource,
        now: i32,
    ) -> Result<Subscription, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(subscribe_on(&mut conn, email, source, now)?)
    }

    #[cfg(test)]
    pub fn find_subscriber(&self, email: &str) -> Result<Option<NewsletterSubscriber>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let subscriber = newsletter_subscribers::table
            .filter(newsletter_subscribers::email.eq(email))
            .select(NewsletterSubscriber::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(subscriber)
    }

    pub fn list_subscribers(&self) -> Result<Vec<NewsletterSubscriber>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let subscribers = newsletter_subscribers::table
            .order((newsletter_subscribers::created_at.desc(), newsletter_subscribers::id.desc()))
            .select(NewsletterSubscriber::as_select())
            .load(&mut conn)?;
        Ok(subscribers)
    }
}

fn subscribe_on(
    conn: &mut SqliteConnection,
    email: &str,
    source: SubscriptionSource,
    now: i32,
) -> Result<Subscription, DieselError> {
    let existing = newsletter_subscribers::table
        .filter(newsletter_subscribers::email.eq(email))
        .select(newsletter_subscribers::id)
        .first::<i32>(conn)
        .optional()?;
    if existing.is_some() {
        return Ok(Subscription::AlreadySubscribed);
    }

    let inserted = diesel::insert_into(newsletter_subscribers::table)
        .values(&NewNewsletterSubscriber {
            email,
            source: source.as_str(),
            created_at: now,
        })
        .execute(conn);

    match inserted {
        Ok(_) => Ok(Subscription::Created),
        // Lost a race with a concurrent signup for the same address
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Ok(Subscription::AlreadySubscribed)
        }
        Err(e) => Err(e),
    }
}
