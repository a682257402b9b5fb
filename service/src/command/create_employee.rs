//! [`Command`] for hiring a new [`Employee`].

use common::operations::{By, Commit, Insert, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        address, city, company, employee, office, position, Address, City,
        Company, Employee, Office, Position,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for hiring a new [`Employee`].
#[derive(Clone, Debug)]
pub struct CreateEmployee {
    /// First [`employee::Name`] of a new [`Employee`].
    pub first_name: employee::Name,

    /// Middle [`employee::Name`] of a new [`Employee`], if any.
    pub middle_name: Option<employee::Name>,

    /// Last [`employee::Name`] of a new [`Employee`].
    pub last_name: employee::Name,

    /// ID of the [`Company`] hiring the [`Employee`].
    pub company_id: company::Id,

    /// ID of the [`Position`] the [`Employee`] is hired for.
    pub position_id: position::Id,

    /// ID of the [`Office`] the [`Employee`] will work at.
    pub office_id: office::Id,

    /// Hiring date and time of the [`Employee`].
    pub hired_at: employee::HiringDateTime,

    /// Home [`Address`] of the [`Employee`].
    pub address: NewAddress,
}

/// Home [`Address`] of an [`Employee`] to be stored.
#[derive(Clone, Debug)]
pub struct NewAddress {
    /// [`address::StreetName`] of the [`Address`].
    pub street_name: address::StreetName,

    /// [`address::StreetNumber`] of the [`Address`].
    pub street_number: address::StreetNumber,

    /// [`address::Neighborhood`] of the [`Address`], if any.
    pub neighborhood: Option<address::Neighborhood>,

    /// [`address::PostalCode`] of the [`Address`], if any.
    pub postal_code: Option<address::PostalCode>,

    /// ID of the [`City`] the [`Address`] is located in.
    pub city_id: city::Id,
}

impl NewAddress {
    /// Converts this [`NewAddress`] into an [`Address`] with the provided
    /// ID and [`address::Kind`].
    #[must_use]
    pub fn into_address(self, id: address::Id, kind: address::Kind) -> Address {
        let Self {
            street_name,
            street_number,
            neighborhood,
            postal_code,
            city_id,
        } = self;
        Address {
            id,
            street_name,
            street_number,
            neighborhood,
            postal_code,
            city_id,
            kind,
        }
    }
}

impl<Db> Command<CreateEmployee> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
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
            Select<By<Option<City>, city::Id>>,
            Ok = Option<City>,
            Err = Traced<database::Error>,
        > + Database<Insert<Address>, Err = Traced<database::Error>>
        + Database<Insert<Employee>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateEmployee {
            first_name,
            middle_name,
            last_name,
            company_id,
            position_id,
            office_id,
            hired_at,
            address,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Select(By::<Option<Company>, _>::new(company_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CompanyNotExists(company_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;
        tx.execute(Select(By::<Option<Position>, _>::new(position_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PositionNotExists(position_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;
        tx.execute(Select(By::<Option<Office>, _>::new(office_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OfficeNotExists(office_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;
        let city_id = address.city_id;
        tx.execute(Select(By::<Option<City>, _>::new(city_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CityNotExists(city_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let address =
            address.into_address(address::Id::new(), address::Kind::Employee);
        let employee = Employee {
            id: employee::Id::new(),
            first_name,
            middle_name,
            last_name,
            address_id: address.id,
            position_id,
            office_id,
            company_id,
            hired_at,
            status: employee::Status::Active,
        };

        tx.execute(Insert(address))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Insert(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!("`Employee(id: {})` hired", employee.id);

        Ok(employee)
    }
}

/// Error of [`CreateEmployee`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`City`] with the provided ID does not exist.
    #[display("`City(id: {_0})` does not exist")]
    CityNotExists(#[error(not(source))] city::Id),

    /// [`Company`] with the provided ID does not exist.
    #[display("`Company(id: {_0})` does not exist")]
    CompanyNotExists(#[error(not(source))] company::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`Office`] with the provided ID does not exist.
    #[display("`Office(id: {_0})` does not exist")]
    OfficeNotExists(#[error(not(source))] office::Id),

    /// [`Position`] with the provided ID does not exist.
    #[display("`Position(id: {_0})` does not exist")]
    PositionNotExists(#[error(not(source))] position::Id),
}

#[cfg(test)]
mod spec {
    use common::{Clock, DateTime};

    use crate::{
        domain::{address, city, employee, office},
        infra::Memory,
        Command as _, Service,
    };

    use super::{CreateEmployee, ExecutionError, NewAddress};

    fn now() -> DateTime {
        DateTime::from_rfc3339("2024-05-31T12:00:00Z").unwrap()
    }

    fn address(city_id: city::Id) -> NewAddress {
        NewAddress {
            street_name: address::StreetName::new("Vitosha Blvd").unwrap(),
            street_number: address::StreetNumber::new("12A").unwrap(),
            neighborhood: Some(address::Neighborhood::new("Center").unwrap()),
            postal_code: Some(address::PostalCode::new("1000").unwrap()),
            city_id,
        }
    }

    #[tokio::test]
    async fn hires_active_employee_with_home_address() {
        let (db, seed) = Memory::seeded(now());
        let service = Service::new(db.clone()).with_clock(Clock::Frozen(now()));

        let employee = service
            .execute(CreateEmployee {
                first_name: employee::Name::new("Jane").unwrap(),
                middle_name: None,
                last_name: employee::Name::new("Smith").unwrap(),
                company_id: seed.company.id,
                position_id: seed.position.id,
                office_id: seed.office.id,
                hired_at: now().coerce(),
                address: address(seed.city.id),
            })
            .await
            .unwrap();

        assert_eq!(employee.status, employee::Status::Active);

        let state = db.snapshot();
        assert_eq!(state.employees.get(&employee.id), Some(&employee));
        let home = &state.addresses[&employee.address_id];
        assert_eq!(home.kind, address::Kind::Employee);
        assert_eq!(home.city_id, seed.city.id);
        assert_eq!(home.street_number.as_ref(), "12A");
    }

    #[tokio::test]
    async fn leaves_no_address_when_reference_is_missing() {
        let (db, seed) = Memory::seeded(now());
        let service = Service::new(db.clone());
        let before = db.snapshot();

        let missing_city = city::Id::new();
        let err = service
            .execute(CreateEmployee {
                first_name: employee::Name::new("Jane").unwrap(),
                middle_name: None,
                last_name: employee::Name::new("Smith").unwrap(),
                company_id: seed.company.id,
                position_id: seed.position.id,
                office_id: seed.office.id,
                hired_at: now().coerce(),
                address: address(missing_city),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::CityNotExists(id) if *id == missing_city,
        ));
        let after = db.snapshot();
        assert_eq!(after.addresses.len(), before.addresses.len());
        assert_eq!(after.employees.len(), before.employees.len());
    }

    #[tokio::test]
    async fn reports_first_missing_reference() {
        let (db, seed) = Memory::seeded(now());
        let service = Service::new(db);

        let missing_office = office::Id::new();
        let err = service
            .execute(CreateEmployee {
                first_name: employee::Name::new("Jane").unwrap(),
                middle_name: None,
                last_name: employee::Name::new("Smith").unwrap(),
                company_id: seed.company.id,
                position_id: seed.position.id,
                office_id: missing_office,
                hired_at: now().coerce(),
                address: address(city::Id::new()),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::OfficeNotExists(id) if *id == missing_office,
        ));
    }
}
