//! In-memory [`Database`] implementation.
//!
//! [`Transact`] stages a copy of the committed [`State`], which [`Commit`]
//! publishes back. Dropping a transacted [`Memory`] without committing
//! discards its changes.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use common::{
    money::Currency,
    operations::{By, Commit, Delete, Insert, Lock, Select, Transact, Update},
    DateTime, Money,
};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::{
    domain::{
        address, city, company, department, employee, office, position,
        salary, Address, City, Company, Department, Employee, Office,
        Position, Salary,
    },
    infra::{database, Database},
    read,
};

/// Contents of a [`Memory`] database.
#[derive(Clone, Debug, Default)]
pub struct State {
    /// Stored [`City`]s.
    pub cities: HashMap<city::Id, City>,

    /// Stored [`Company`]s.
    pub companies: HashMap<company::Id, Company>,

    /// Stored [`Address`]es.
    pub addresses: HashMap<address::Id, Address>,

    /// Stored [`Office`]s.
    pub offices: HashMap<office::Id, Office>,

    /// Stored [`Department`]s.
    pub departments: HashMap<department::Id, Department>,

    /// Stored [`Position`]s.
    pub positions: HashMap<position::Id, Position>,

    /// Stored [`Employee`]s.
    pub employees: HashMap<employee::Id, Employee>,

    /// Stored [`Salary`] records.
    pub salaries: HashMap<salary::Id, Salary>,
}

/// In-memory [`Database`].
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Committed [`State`] shared between all the clones.
    committed: Arc<Mutex<State>>,

    /// [`State`] staged by a transaction, if this [`Memory`] is transacted.
    staged: Option<Arc<Mutex<State>>>,
}

impl Memory {
    /// Creates a new [`Memory`] database with the provided [`State`].
    #[must_use]
    pub fn new(state: State) -> Self {
        Self {
            committed: Arc::new(Mutex::new(state)),
            staged: None,
        }
    }

    /// Returns a copy of the committed [`State`].
    #[must_use]
    pub fn snapshot(&self) -> State {
        lock(&self.committed).clone()
    }

    /// Returns the [`State`] operations of this [`Memory`] act upon.
    fn state(&self) -> MutexGuard<'_, State> {
        lock(self.staged.as_ref().unwrap_or(&self.committed))
    }
}

/// Locks the provided [`State`] ignoring poisoning.
fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Entity stored in a [`Memory`] database.
pub trait Stored: Clone {
    /// Type of the entity ID.
    type Id: Copy + Eq + Hash;

    /// Returns the ID of this entity.
    fn id(&self) -> Self::Id;

    /// Returns the table of these entities in the provided [`State`].
    fn table(state: &mut State) -> &mut HashMap<Self::Id, Self>;
}

/// Implements [`Stored`] for the provided entities.
macro_rules! impl_stored {
    ($($entity:ty => $id:ty, $table:ident);* $(;)?) => {$(
        impl Stored for $entity {
            type Id = $id;

            fn id(&self) -> Self::Id {
                self.id
            }

            fn table(state: &mut State) -> &mut HashMap<Self::Id, Self> {
                &mut state.$table
            }
        }
    )*};
}

impl_stored! {
    City => city::Id, cities;
    Company => company::Id, companies;
    Address => address::Id, addresses;
    Office => office::Id, offices;
    Department => department::Id, departments;
    Position => position::Id, positions;
    Employee => employee::Id, employees;
    Salary => salary::Id, salaries;
}

impl Database<Transact> for Memory {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        if self.staged.is_some() {
            return Ok(self.clone());
        }
        Ok(Self {
            committed: Arc::clone(&self.committed),
            staged: Some(Arc::new(Mutex::new(self.snapshot()))),
        })
    }
}

impl Database<Commit> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        if let Some(staged) = &self.staged {
            *lock(&self.committed) = lock(staged).clone();
        }
        Ok(())
    }
}

impl<T: Stored> Database<Select<By<Option<T>, T::Id>>> for Memory {
    type Ok = Option<T>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<T>, T::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(T::table(&mut self.state()).get(&by.into_inner()).cloned())
    }
}

impl<T: Stored> Database<Select<By<Vec<T>, ()>>> for Memory {
    type Ok = Vec<T>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<T>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(T::table(&mut self.state()).values().cloned().collect())
    }
}

impl<T: Stored> Database<Insert<T>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(entity): Insert<T>,
    ) -> Result<Self::Ok, Self::Err> {
        _ = T::table(&mut self.state()).insert(entity.id(), entity);
        Ok(())
    }
}

impl<T: Stored> Database<Update<T>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(entity): Update<T>,
    ) -> Result<Self::Ok, Self::Err> {
        _ = T::table(&mut self.state()).insert(entity.id(), entity);
        Ok(())
    }
}

impl Database<Lock<By<Employee, employee::Id>>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Lock<By<Employee, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(())
    }
}

impl Database<Select<By<Vec<Employee>, read::employee::list::Selector>>>
    for Memory
{
    type Ok = Vec<Employee>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<Vec<Employee>, read::employee::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();
        let mut employees = self
            .state()
            .employees
            .values()
            .filter(|e| selector.matches(e))
            .cloned()
            .collect::<Vec<_>>();
        employees.sort_by(|a, b| {
            (a.last_name.as_ref(), a.first_name.as_ref())
                .cmp(&(b.last_name.as_ref(), b.first_name.as_ref()))
        });
        Ok(employees)
    }
}

impl Database<Select<By<Vec<Salary>, employee::Id>>> for Memory {
    type Ok = Vec<Salary>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Salary>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let employee_id = by.into_inner();
        let mut salaries = self
            .state()
            .salaries
            .values()
            .filter(|s| s.employee_id == employee_id)
            .cloned()
            .collect::<Vec<_>>();
        salaries.sort_by_key(|s| s.period.start());
        Ok(salaries)
    }
}

impl Database<Delete<By<Salary, salary::Id>>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Salary, salary::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        _ = self.state().salaries.remove(&by.into_inner());
        Ok(())
    }
}

/// Reference data every [`Memory::seeded()`] database starts with.
#[derive(Clone, Debug)]
pub struct Seed {
    /// Seeded [`City`].
    pub city: City,

    /// Seeded [`Company`].
    pub company: Company,

    /// Seeded [`Office`].
    pub office: Office,

    /// Seeded [`Position`] paying `5000 BGN`.
    pub position: Position,

    /// Seeded active [`Employee`] holding the [`Seed::position`].
    pub employee: Employee,
}

impl Memory {
    /// Creates a new [`Memory`] database filled with a single [`Company`]
    /// structure and one active [`Employee`] hired at the provided moment.
    #[expect(clippy::missing_panics_doc, reason = "test fixture")]
    #[must_use]
    pub fn seeded(hired_at: DateTime) -> (Self, Seed) {
        let city = City {
            id: city::Id::new(),
            name: city::Name::new("Sofia").expect("valid"),
        };
        let company = Company {
            id: company::Id::new(),
            name: company::Name::new("Tech Solutions Ltd.").expect("valid"),
        };
        let office_address = Address {
            id: address::Id::new(),
            street_name: address::StreetName::new("Main Street")
                .expect("valid"),
            street_number: address::StreetNumber::new("1").expect("valid"),
            neighborhood: None,
            postal_code: None,
            city_id: city.id,
            kind: address::Kind::Office,
        };
        let office = Office {
            id: office::Id::new(),
            name: office::Name::new("Sofia HQ").expect("valid"),
            company_id: company.id,
            address_id: office_address.id,
        };
        let department = Department {
            id: department::Id::new(),
            name: department::Name::new("IT").expect("valid"),
            company_id: company.id,
        };
        let position = Position {
            id: position::Id::new(),
            title: position::Title::new("Senior Developer").expect("valid"),
            base_salary: Money {
                amount: Decimal::new(5000, 0),
                currency: Currency::Bgn,
            },
            department_id: department.id,
        };
        let home = Address {
            id: address::Id::new(),
            kind: address::Kind::Employee,
            ..office_address.clone()
        };
        let employee = Employee {
            id: employee::Id::new(),
            first_name: employee::Name::new("John").expect("valid"),
            middle_name: None,
            last_name: employee::Name::new("Doe").expect("valid"),
            address_id: home.id,
            position_id: position.id,
            office_id: office.id,
            company_id: company.id,
            hired_at: hired_at.coerce(),
            status: employee::Status::Active,
        };

        let state = State {
            cities: HashMap::from([(city.id, city.clone())]),
            companies: HashMap::from([(company.id, company.clone())]),
            addresses: HashMap::from([
                (office_address.id, office_address),
                (home.id, home),
            ]),
            offices: HashMap::from([(office.id, office.clone())]),
            departments: HashMap::from([(department.id, department)]),
            positions: HashMap::from([(position.id, position.clone())]),
            employees: HashMap::from([(employee.id, employee.clone())]),
            salaries: HashMap::new(),
        };

        (
            Self::new(state),
            Seed {
                city,
                company,
                office,
                position,
                employee,
            },
        )
    }
}
