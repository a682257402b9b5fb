//! [`Salary`]-related definitions.

use common::{Date, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query, read};

use crate::{
    api::{self, scalar, NotExistsError},
    Context, Error,
};

scalar::define_id! {
    #[doc = "Unique identifier of a `Salary`."]
    "SalaryId" => domain::salary::Id
}

/// Salary paid to an [`api::Employee`] for a period.
#[derive(Clone, Debug, From)]
pub struct Salary(domain::Salary);

impl Salary {
    /// Builds the [`Statement`] of this [`Salary`].
    ///
    /// # Errors
    ///
    /// If the [`Salary`] has been deleted since it was loaded.
    async fn statement(&self, ctx: &Context) -> Result<Statement, Error> {
        api::find(
            ctx,
            query::salary::Statement {
                salary_id: self.0.id,
            },
            NotExistsError::Salary,
        )
        .await
        .map(Statement)
    }
}

/// Salary paid to an `Employee` for a period.
#[graphql_object(context = Context)]
impl Salary {
    /// Unique identifier of this `Salary`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// First day of the period this `Salary` is paid for.
    #[must_use]
    pub fn period_start(&self) -> Date {
        self.0.period.start()
    }

    /// Last day of the period this `Salary` is paid for.
    #[must_use]
    pub fn period_end(&self) -> Date {
        self.0.period.end()
    }

    /// Bonus on top of the base salary, in its currency.
    #[must_use]
    pub fn bonus(&self) -> Amount {
        self.0.bonus.into()
    }

    /// Deduction from the base salary, in its currency.
    #[must_use]
    pub fn deduction(&self) -> Amount {
        self.0.deduction.into()
    }

    /// `Employee` this `Salary` is paid to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Salary.employee",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn employee(
        &self,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        api::find(
            ctx,
            query::employee::ById::by(self.0.employee_id),
            NotExistsError::Employee,
        )
        .await
        .map(Into::into)
    }

    /// Current base salary of the `Employee`'s `Position`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Salary.baseSalary",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn base_salary(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.statement(ctx).await?.0.base_salary)
    }

    /// Base salary plus bonus minus deduction.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Salary.totalPay",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn total_pay(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.statement(ctx).await?.0.total_pay())
    }
}

/// Non-negative amount of a `Salary` bonus or deduction with at most two
/// fractional digits.
#[derive(AsRef, Clone, Copy, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "SalaryAmount",
    with = scalar::Via::<domain::salary::Amount>,
)]
pub struct Amount(domain::salary::Amount);

/// Statement of a [`Salary`] paid to an [`api::Employee`].
#[derive(Clone, Debug, From)]
pub struct Statement(read::salary::Statement);

impl Statement {
    /// Expresses the provided salary [`domain::salary::Amount`] in the
    /// currency of the base salary.
    fn in_currency(&self, amount: domain::salary::Amount) -> Money {
        Money {
            amount: amount.into(),
            currency: self.0.base_salary.currency,
        }
    }
}

/// Statement of a `Salary` paid to an `Employee`.
#[graphql_object(name = "SalaryStatement", context = Context)]
impl Statement {
    /// `Salary` this statement is about.
    #[must_use]
    pub fn salary(&self) -> Salary {
        self.0.salary.clone().into()
    }

    /// Full name of the `Employee`.
    #[must_use]
    pub fn employee_name(&self) -> &str {
        &self.0.employee_name
    }

    /// Title of the `Employee`'s `Position`.
    #[must_use]
    pub fn position_title(&self) -> &str {
        self.0.position_title.as_ref()
    }

    /// First day of the period.
    #[must_use]
    pub fn period_start(&self) -> Date {
        self.0.salary.period.start()
    }

    /// Last day of the period.
    #[must_use]
    pub fn period_end(&self) -> Date {
        self.0.salary.period.end()
    }

    /// Base salary of the `Employee`'s `Position`.
    #[must_use]
    pub fn base_salary(&self) -> Money {
        self.0.base_salary
    }

    /// Bonus on top of the base salary.
    #[must_use]
    pub fn bonus(&self) -> Money {
        self.in_currency(self.0.salary.bonus)
    }

    /// Deduction from the base salary.
    #[must_use]
    pub fn deduction(&self) -> Money {
        self.in_currency(self.0.salary.deduction)
    }

    /// Base salary plus bonus minus deduction.
    #[must_use]
    pub fn total_pay(&self) -> Money {
        self.0.total_pay()
    }

    /// Plain-text rendering of this statement with amounts fixed to two
    /// decimals.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.to_string()
    }
}
