//! [`Address`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{address, Address},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Reads an [`Address`] from the provided [`Row`].
fn from_row(row: &Row) -> Address {
    Address {
        id: row.get("id"),
        street_name: row.get("street_name"),
        street_number: row.get("street_number"),
        neighborhood: row.get("neighborhood"),
        postal_code: row.get("postal_code"),
        city_id: row.get("city_id"),
        kind: row.get("kind"),
    }
}

impl<C> Database<Select<By<Option<Address>, address::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Address>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Address>, address::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        // Avoid subtle change for SQL.
        let id: address::Id = by.into_inner();

        const SQL: &str = "\
            SELECT id, street_name, street_number, \
                   neighborhood, postal_code, city_id, kind \
            FROM addresses \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(from_row))
    }
}

impl<C> Database<Select<By<Vec<Address>, ()>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Address>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Address>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, street_name, street_number, \
                   neighborhood, postal_code, city_id, kind \
            FROM addresses \
            ORDER BY street_name, street_number, id";
        Ok(self
            .query(SQL, &[])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(from_row)
            .collect())
    }
}

impl<C> Database<Insert<Address>> for Postgres<C>
where
    C: Connection,
    Self: Database<Update<Address>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(address): Insert<Address>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(address))
            .await
            .map_err(tracerr::wrap!())
    }
}

impl<C> Database<Update<Address>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(address): Update<Address>,
    ) -> Result<Self::Ok, Self::Err> {
        let Address {
            id,
            street_name,
            street_number,
            neighborhood,
            postal_code,
            city_id,
            kind,
        } = address;

        const SQL: &str = "\
            INSERT INTO addresses (\
                id, street_name, street_number, \
                neighborhood, postal_code, city_id, kind\
            ) \
            VALUES (\
                $1::UUID, $2::VARCHAR, $3::VARCHAR, \
                $4::VARCHAR, $5::VARCHAR, $6::UUID, $7::INT2\
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET street_name = EXCLUDED.street_name, \
                street_number = EXCLUDED.street_number, \
                neighborhood = EXCLUDED.neighborhood, \
                postal_code = EXCLUDED.postal_code, \
                city_id = EXCLUDED.city_id, \
                kind = EXCLUDED.kind";
        self.exec(
            SQL,
            &[
                &id,
                &street_name,
                &street_number,
                &neighborhood,
                &postal_code,
                &city_id,
                &kind,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}
