//! [`Query`] collection related to a single [`Employee`].

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{
        address, city, company, employee, office, position, Address, City,
        Company, Employee, Office, Position, Salary,
    },
    infra::{database, Database},
    read, Query, Service,
};

use super::DatabaseQuery;

/// Queries an [`Employee`] by its [`employee::Id`].
pub type ById = DatabaseQuery<By<Option<Employee>, employee::Id>>;

/// [`Query`] collecting [`read::employee::Details`] of an [`Employee`].
#[derive(Clone, Copy, Debug)]
pub struct Details {
    /// ID of the [`Employee`] to collect details of.
    pub employee_id: employee::Id,
}

impl<Db> Query<Details> for Service<Db>
where
    Db: Database<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Address>, address::Id>>,
            Ok = Option<Address>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<City>, city::Id>>,
            Ok = Option<City>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Company>, company::Id>>,
            Ok = Option<Company>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Position>, position::Id>>,
            Ok = Option<Position>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Office>, office::Id>>,
            Ok = Option<Office>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Salary>, employee::Id>>,
            Ok = Vec<Salary>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Option<read::employee::Details>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Details { employee_id }: Details,
    ) -> Result<Self::Ok, Self::Err> {
        let db = self.database();

        let Some(employee) = db
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        // References are restricted from deletion, so they always exist
        // for a stored `Employee`.
        let Some(address) = db
            .execute(Select(By::<Option<Address>, _>::new(employee.address_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };
        let Some(city) = db
            .execute(Select(By::<Option<City>, _>::new(address.city_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };
        let Some(company) = db
            .execute(Select(By::<Option<Company>, _>::new(employee.company_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };
        let Some(position) = db
            .execute(Select(By::<Option<Position>, _>::new(
                employee.position_id,
            )))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };
        let Some(office) = db
            .execute(Select(By::<Option<Office>, _>::new(employee.office_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };
        let salaries = db
            .execute(Select(By::<Vec<Salary>, _>::new(employee_id)))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(Some(read::employee::Details {
            employee,
            address,
            city,
            company,
            position,
            office,
            salaries,
        }))
    }
}

#[cfg(test)]
mod spec {
    use common::{Clock, DateTime};

    use crate::{
        command::CreateSalary,
        domain::{employee, salary},
        infra::Memory,
        query, read, Command as _, Service,
    };

    use super::Details;

    fn now() -> DateTime {
        DateTime::from_rfc3339("2024-05-31T12:00:00Z").unwrap()
    }

    #[tokio::test]
    async fn collects_everything_about_employee() {
        let (db, seed) = Memory::seeded(now());
        let service = Service::new(db).with_clock(Clock::Frozen(now()));
        for (start, end) in
            [("2024-02-01", "2024-02-29"), ("2024-01-01", "2024-01-31")]
        {
            _ = service
                .execute(CreateSalary {
                    employee_id: seed.employee.id,
                    period_start: start.parse().unwrap(),
                    period_end: end.parse().unwrap(),
                    bonus: salary::Amount::ZERO,
                    deduction: salary::Amount::ZERO,
                })
                .await
                .unwrap();
        }

        let details = service
            .execute(Details {
                employee_id: seed.employee.id,
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(details.employee, seed.employee);
        assert_eq!(details.city, seed.city);
        assert_eq!(details.company, seed.company);
        assert_eq!(details.position, seed.position);
        assert_eq!(details.office, seed.office);
        assert_eq!(details.address.id, seed.employee.address_id);
        let starts = details
            .salaries
            .iter()
            .map(|s| s.period.start().to_string())
            .collect::<Vec<_>>();
        assert_eq!(starts, ["2024-01-01", "2024-02-01"]);
    }

    #[tokio::test]
    async fn returns_nothing_for_missing_employee() {
        let (db, _) = Memory::seeded(now());
        let service = Service::new(db);

        let details = service
            .execute(Details {
                employee_id: employee::Id::new(),
            })
            .await
            .unwrap();

        assert!(details.is_none());
    }

    #[tokio::test]
    async fn lists_employees_by_status() {
        let (db, seed) = Memory::seeded(now());
        let service = Service::new(db).with_clock(Clock::Frozen(now()));
        _ = service
            .execute(crate::command::TerminateEmployee {
                employee_id: seed.employee.id,
            })
            .await
            .unwrap();

        let active = service
            .execute(query::employees::List::by(
                read::employee::list::Selector::Active,
            ))
            .await
            .unwrap();
        let terminated = service
            .execute(query::employees::List::by(
                read::employee::list::Selector::Terminated,
            ))
            .await
            .unwrap();

        assert!(active.is_empty());
        assert_eq!(terminated.len(), 1);
        assert_eq!(terminated[0].id, seed.employee.id);
    }
}
