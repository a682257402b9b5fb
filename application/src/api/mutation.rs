//! GraphQL [`Mutation`]s definitions.

use common::{Date, DateTime};
use juniper::graphql_object;
use service::{command, domain, Command as _};

use crate::{
    api::{self, NotExistsError},
    define_error, AsError, Context, Error,
};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Hires a new `Employee` living at the provided `Address`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `CITY_NOT_EXISTS` - the `City` of the `Address` does not exist;
    /// - `COMPANY_NOT_EXISTS` - the `Company` does not exist;
    /// - `OFFICE_NOT_EXISTS` - the `Office` does not exist;
    /// - `POSITION_NOT_EXISTS` - the `Position` does not exist.
    #[expect(clippy::too_many_arguments, reason = "GraphQL arguments")]
    #[tracing::instrument(
        skip_all,
        fields(
            company_id = %company_id,
            gql.name = "createEmployee",
            office_id = %office_id,
            otel.name = Self::SPAN_NAME,
            position_id = %position_id,
        ),
    )]
    pub async fn create_employee(
        first_name: api::employee::Name,
        middle_name: Option<api::employee::Name>,
        last_name: api::employee::Name,
        company_id: api::reference::company::Id,
        position_id: api::reference::position::Id,
        office_id: api::reference::office::Id,
        hired_at: DateTime,
        address: api::address::Input,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        ctx.service()
            .execute(command::CreateEmployee {
                first_name: first_name.into(),
                middle_name: middle_name.map(Into::into),
                last_name: last_name.into(),
                company_id: company_id.into(),
                position_id: position_id.into(),
                office_id: office_id.into(),
                hired_at: hired_at.coerce(),
                address: address.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Overwrites every mutable field of the `Employee` and its home
    /// `Address`.
    ///
    /// The `Employee` is terminated if `terminatedAt` is provided, and active
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist.
    #[expect(clippy::too_many_arguments, reason = "GraphQL arguments")]
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateEmployee",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_employee(
        id: api::employee::Id,
        first_name: api::employee::Name,
        middle_name: Option<api::employee::Name>,
        last_name: api::employee::Name,
        company_id: api::reference::company::Id,
        position_id: api::reference::position::Id,
        office_id: api::reference::office::Id,
        hired_at: DateTime,
        terminated_at: Option<DateTime>,
        address: api::address::Input,
        address_kind: Option<api::address::Kind>,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        ctx.service()
            .execute(command::UpdateEmployee {
                employee_id: id.into(),
                first_name: first_name.into(),
                middle_name: middle_name.map(Into::into),
                last_name: last_name.into(),
                company_id: company_id.into(),
                position_id: position_id.into(),
                office_id: office_id.into(),
                hired_at: hired_at.coerce(),
                terminated_at: terminated_at.map(DateTime::coerce),
                address: address.into(),
                address_kind: address_kind
                    .map_or(domain::address::Kind::Employee, Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Terminates the `Employee` now.
    ///
    /// Terminating an already terminated `Employee` moves its termination
    /// `DateTime` to now.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "terminateEmployee",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn terminate_employee(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        ctx.service()
            .execute(command::TerminateEmployee {
                employee_id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Rehires the terminated `Employee` now.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `EMPLOYEE_NOT_TERMINATED` - the `Employee` is active.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "rehireEmployee",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn rehire_employee(
        id: api::employee::Id,
        ctx: &Context,
    ) -> Result<api::Employee, Error> {
        ctx.service()
            .execute(command::RehireEmployee {
                employee_id: id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Records a new `Salary` of the `Employee` for the provided period.
    ///
    /// Omitted `bonus` and `deduction` are zero.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `EMPLOYEE_NOT_EXISTS` - the `Employee` with the specified ID does
    ///                           not exist;
    /// - `SALARY_START_AFTER_END` - `periodStart` is after `periodEnd`;
    /// - `SALARY_FUTURE_PERIOD` - the period ends after today;
    /// - `SALARY_PERIOD_OVERLAP` - the period overlaps with another `Salary`
    ///                             of the `Employee`;
    /// - `EMPLOYEE_TERMINATED` - the `Employee` is terminated.
    #[tracing::instrument(
        skip_all,
        fields(
            employee_id = %employee_id,
            gql.name = "createSalary",
            otel.name = Self::SPAN_NAME,
            period_end = %period_end,
            period_start = %period_start,
        ),
    )]
    pub async fn create_salary(
        employee_id: api::employee::Id,
        period_start: Date,
        period_end: Date,
        bonus: Option<api::salary::Amount>,
        deduction: Option<api::salary::Amount>,
        ctx: &Context,
    ) -> Result<api::Salary, Error> {
        ctx.service()
            .execute(command::CreateSalary {
                employee_id: employee_id.into(),
                period_start,
                period_end,
                bonus: bonus.map(Into::into).unwrap_or_default(),
                deduction: deduction.map(Into::into).unwrap_or_default(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Overwrites the period, bonus and deduction of the `Salary`.
    ///
    /// Omitted `bonus` and `deduction` are zero.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `SALARY_NOT_EXISTS` - the `Salary` with the specified ID does not
    ///                         exist;
    /// - `SALARY_START_AFTER_END` - `periodStart` is after `periodEnd`;
    /// - `SALARY_PERIOD_OVERLAP` - the period overlaps with another `Salary`
    ///                             of the `Employee`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateSalary",
            id = %id,
            otel.name = Self::SPAN_NAME,
            period_end = %period_end,
            period_start = %period_start,
        ),
    )]
    pub async fn update_salary(
        id: api::salary::Id,
        period_start: Date,
        period_end: Date,
        bonus: Option<api::salary::Amount>,
        deduction: Option<api::salary::Amount>,
        ctx: &Context,
    ) -> Result<api::Salary, Error> {
        ctx.service()
            .execute(command::UpdateSalary {
                salary_id: id.into(),
                period_start,
                period_end,
                bonus: bonus.map(Into::into).unwrap_or_default(),
                deduction: deduction.map(Into::into).unwrap_or_default(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Deletes the `Salary` and returns it.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `SALARY_NOT_EXISTS` - the `Salary` with the specified ID does not
    ///                         exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "deleteSalary",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn delete_salary(
        id: api::salary::Id,
        ctx: &Context,
    ) -> Result<api::Salary, Error> {
        ctx.service()
            .execute(command::DeleteSalary { salary_id: id.into() })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

define_error! {
    enum EmployeeError {
        #[code = "EMPLOYEE_NOT_TERMINATED"]
        #[status = CONFLICT]
        #[message = "`Employee` is not terminated"]
        NotTerminated,

        #[code = "EMPLOYEE_TERMINATED"]
        #[status = BAD_REQUEST]
        #[message = "`Employee` is terminated"]
        Terminated,
    }
}

define_error! {
    enum SalaryError {
        #[code = "SALARY_FUTURE_PERIOD"]
        #[status = BAD_REQUEST]
        #[message = "`Salary` period cannot end after today"]
        FuturePeriod,

        #[code = "SALARY_PERIOD_OVERLAP"]
        #[status = BAD_REQUEST]
        #[message = "`Salary` period overlaps with another `Salary` of the \
                     `Employee`"]
        PeriodOverlap,

        #[code = "SALARY_START_AFTER_END"]
        #[status = BAD_REQUEST]
        #[message = "`Salary` period cannot start after it ends"]
        StartAfterEnd,
    }
}

impl AsError for command::create_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::CityNotExists(_) => NotExistsError::City.into(),
            Self::CompanyNotExists(_) => NotExistsError::Company.into(),
            Self::OfficeNotExists(_) => NotExistsError::Office.into(),
            Self::PositionNotExists(_) => NotExistsError::Position.into(),
        })
    }
}

impl AsError for command::update_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmployeeNotExists(_) => Some(NotExistsError::Employee.into()),
        }
    }
}

impl AsError for command::terminate_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::EmployeeNotExists(_) => Some(NotExistsError::Employee.into()),
        }
    }
}

impl AsError for command::rehire_employee::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployeeNotExists(_) => NotExistsError::Employee.into(),
            Self::EmployeeNotTerminated(_) => {
                EmployeeError::NotTerminated.into()
            }
        })
    }
}

impl AsError for command::create_salary::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::EmployeeNotExists(_) => NotExistsError::Employee.into(),
            Self::EmployeeTerminated(_) => EmployeeError::Terminated.into(),
            Self::PeriodInFuture { .. } => SalaryError::FuturePeriod.into(),
            Self::PeriodOverlaps(_) => SalaryError::PeriodOverlap.into(),
            Self::PeriodStartAfterEnd { .. } => {
                SalaryError::StartAfterEnd.into()
            }
        })
    }
}

impl AsError for command::update_salary::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        Some(match self {
            Self::Db(e) => return e.try_as_error(),
            Self::PeriodOverlaps(_) => SalaryError::PeriodOverlap.into(),
            Self::PeriodStartAfterEnd { .. } => {
                SalaryError::StartAfterEnd.into()
            }
            Self::SalaryNotExists(_) => NotExistsError::Salary.into(),
        })
    }
}

impl AsError for command::delete_salary::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Db(e) => e.try_as_error(),
            Self::SalaryNotExists(_) => Some(NotExistsError::Salary.into()),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::Date;
    use service::{
        command::{create_salary, rehire_employee},
        domain::{employee, salary},
    };

    use crate::AsError as _;

    #[test]
    fn salary_violations_are_bad_requests() {
        let today: Date = "2024-03-31".parse().unwrap();
        for (err, code) in [
            (
                create_salary::ExecutionError::PeriodStartAfterEnd {
                    start: today,
                    end: today,
                },
                "SALARY_START_AFTER_END",
            ),
            (
                create_salary::ExecutionError::PeriodInFuture { today },
                "SALARY_FUTURE_PERIOD",
            ),
            (
                create_salary::ExecutionError::PeriodOverlaps(
                    salary::Id::new(),
                ),
                "SALARY_PERIOD_OVERLAP",
            ),
            (
                create_salary::ExecutionError::EmployeeTerminated(
                    employee::Id::new(),
                ),
                "EMPLOYEE_TERMINATED",
            ),
        ] {
            let err = err.as_error();

            assert_eq!(err.code, code);
            assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn missing_employee_is_not_found() {
        let err = create_salary::ExecutionError::EmployeeNotExists(
            employee::Id::new(),
        )
        .as_error();

        assert_eq!(err.code, "EMPLOYEE_NOT_EXISTS");
        assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn rehiring_active_employee_is_conflict() {
        let err = rehire_employee::ExecutionError::EmployeeNotTerminated(
            employee::Id::new(),
        )
        .as_error();

        assert_eq!(err.code, "EMPLOYEE_NOT_TERMINATED");
        assert_eq!(err.status_code, http::StatusCode::CONFLICT);
    }
}
