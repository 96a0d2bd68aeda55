use std::marker::PhantomData;

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter,
};

use crate::errors::InternalError;
use crate::errors::internal::RecordError;

/// Conjunction of column predicates, e.g. `vec![Column::QueryParameter.eq(value)]`
pub type Predicates = Vec<SimpleExpr>;

/// What a fetch does when no row matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// Fail with `RecordError::NotFound`
    Raise,
    /// Return `None` or an empty list and let the caller decide
    ReturnEmpty,
}

/// Generic data access for any SeaORM entity
///
/// Holds no connection; every call takes the connection (usually a session
/// transaction) it should run on.
pub struct Repository<E: EntityTrait> {
    not_found: NotFoundPolicy,
    _entity: PhantomData<fn() -> E>,
}

impl<E: EntityTrait> Repository<E> {
    pub fn new(not_found: NotFoundPolicy) -> Self {
        Self {
            not_found,
            _entity: PhantomData,
        }
    }

    /// Repository that fails on empty results
    pub fn raising() -> Self {
        Self::new(NotFoundPolicy::Raise)
    }

    /// Repository that returns empty results
    pub fn returning_empty() -> Self {
        Self::new(NotFoundPolicy::ReturnEmpty)
    }

    /// Fetch at most one row matching all predicates
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` when nothing matches under `Raise`,
    /// or a database error if the query fails.
    pub async fn fetch_one<C>(&self, conn: &C, predicates: Predicates) -> Result<Option<E::Model>, InternalError>
    where
        C: ConnectionTrait,
    {
        let description = describe(&predicates);

        let found = E::find()
            .filter(all_of(predicates))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("fetch_one", e))?;

        match (found, self.not_found) {
            (None, NotFoundPolicy::Raise) => Err(not_found::<E>(description)),
            (found, _) => Ok(found),
        }
    }

    /// Fetch exactly one row, failing when nothing matches regardless of policy
    pub async fn require_one<C>(&self, conn: &C, predicates: Predicates) -> Result<E::Model, InternalError>
    where
        C: ConnectionTrait,
    {
        let description = describe(&predicates);

        Self::raising()
            .fetch_one(conn, predicates)
            .await?
            .ok_or_else(|| not_found::<E>(description))
    }

    /// Fetch every row matching all predicates; an empty list selects all rows
    ///
    /// # Errors
    ///
    /// Returns `RecordError::NotFound` when nothing matches under `Raise`,
    /// or a database error if the query fails.
    pub async fn fetch_many<C>(&self, conn: &C, predicates: Predicates) -> Result<Vec<E::Model>, InternalError>
    where
        C: ConnectionTrait,
    {
        let description = describe(&predicates);

        let rows = E::find()
            .filter(all_of(predicates))
            .all(conn)
            .await
            .map_err(|e| InternalError::database("fetch_many", e))?;

        if rows.is_empty() && self.not_found == NotFoundPolicy::Raise {
            return Err(not_found::<E>(description));
        }

        Ok(rows)
    }

    /// Stage a new row, flush it and return the stored model
    ///
    /// The returned model carries the server-assigned identity. Nothing is
    /// visible to other sessions until the caller commits.
    pub async fn add<'a, C, A>(&self, conn: &'a C, row: A) -> Result<E::Model, InternalError>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        row.insert(conn)
            .await
            .map_err(|e| InternalError::database("add", e))
    }
}

impl<E: EntityTrait> Default for Repository<E> {
    fn default() -> Self {
        Self::returning_empty()
    }
}

impl<E: EntityTrait> std::fmt::Debug for Repository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &E::default().table_name())
            .field("not_found", &self.not_found)
            .finish()
    }
}

fn all_of(predicates: Predicates) -> Condition {
    predicates
        .into_iter()
        .fold(Condition::all(), |condition, predicate| condition.add(predicate))
}

fn describe(predicates: &Predicates) -> String {
    format!("{:?}", predicates)
}

fn not_found<E: EntityTrait>(conditions: String) -> InternalError {
    RecordError::not_found(E::default().table_name(), conditions).into()
}
