//! SeaORM-backed repository implementation for the domain port.
//!
//! Batch inserts run inside an explicit transaction so the importer's
//! all-or-nothing contract holds: a mid-batch constraint violation rolls
//! every staged row back.

use std::collections::HashMap;

use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::contract::model::{
    Favorite, FavoriteKind, FavoriteTarget, FavoriteView, NewFavorite, NewPerson, NewPlanet,
    NewUser, Person, Planet, User,
};
use crate::domain::repo::CatalogRepository;
use crate::infra::storage::entity::{favorite, person, planet, user};
use crate::infra::storage::mapper;

pub struct SeaOrmCatalogRepository {
    db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn insert_people(&self, batch: Vec<NewPerson>) -> anyhow::Result<u64> {
        let txn = self.db.begin().await.context("begin people batch")?;

        let mut inserted = 0u64;
        for p in batch {
            person::ActiveModel {
                name: Set(p.name),
                height: Set(p.height),
                mass: Set(p.mass),
                gender: Set(p.gender),
                birth_year: Set(p.birth_year),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .context("insert person")?;
            inserted += 1;
        }

        txn.commit().await.context("commit people batch")?;
        Ok(inserted)
    }

    async fn insert_planets(&self, batch: Vec<NewPlanet>) -> anyhow::Result<u64> {
        let txn = self.db.begin().await.context("begin planet batch")?;

        let mut inserted = 0u64;
        for p in batch {
            planet::ActiveModel {
                name: Set(p.name),
                climate: Set(p.climate),
                population: Set(p.population),
                terrain: Set(p.terrain),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .context("insert planet")?;
            inserted += 1;
        }

        txn.commit().await.context("commit planet batch")?;
        Ok(inserted)
    }

    async fn list_people(&self) -> anyhow::Result<Vec<Person>> {
        let rows = person::Entity::find()
            .order_by_asc(person::Column::Id)
            .all(&self.db)
            .await
            .context("list people")?;
        Ok(rows.into_iter().map(mapper::person_to_contract).collect())
    }

    async fn find_person(&self, id: i32) -> anyhow::Result<Option<Person>> {
        let found = person::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find person")?;
        Ok(found.map(mapper::person_to_contract))
    }

    async fn list_planets(&self) -> anyhow::Result<Vec<Planet>> {
        let rows = planet::Entity::find()
            .order_by_asc(planet::Column::Id)
            .all(&self.db)
            .await
            .context("list planets")?;
        Ok(rows.into_iter().map(mapper::planet_to_contract).collect())
    }

    async fn find_planet(&self, id: i32) -> anyhow::Result<Option<Planet>> {
        let found = planet::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet")?;
        Ok(found.map(mapper::planet_to_contract))
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let rows = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(rows.into_iter().map(mapper::user_to_contract).collect())
    }

    async fn find_user(&self, id: i32) -> anyhow::Result<Option<User>> {
        let found = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user")?;
        Ok(found.map(mapper::user_to_contract))
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("email_exists failed")?;
        Ok(count > 0)
    }

    async fn insert_user(&self, new_user: NewUser) -> anyhow::Result<User> {
        let inserted = user::ActiveModel {
            email: Set(new_user.email),
            password: Set(new_user.password),
            is_active: Set(new_user.is_active),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert user")?;
        Ok(mapper::user_to_contract(inserted))
    }

    async fn insert_favorite(&self, new_favorite: NewFavorite) -> anyhow::Result<Favorite> {
        let (person_id, planet_id) = match new_favorite.target {
            FavoriteTarget::Person(id) => (Some(id), None),
            FavoriteTarget::Planet(id) => (None, Some(id)),
        };

        let inserted = favorite::ActiveModel {
            user_id: Set(new_favorite.user_id),
            person_id: Set(person_id),
            planet_id: Set(planet_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert favorite")?;

        mapper::favorite_to_contract(inserted)
    }

    async fn favorites_for_user(&self, user_id: i32) -> anyhow::Result<Vec<FavoriteView>> {
        let favorites = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::Id)
            .all(&self.db)
            .await
            .context("list favorites")?;

        let person_ids: Vec<i32> = favorites.iter().filter_map(|f| f.person_id).collect();
        let planet_ids: Vec<i32> = favorites.iter().filter_map(|f| f.planet_id).collect();

        let person_names: HashMap<i32, String> = if person_ids.is_empty() {
            HashMap::new()
        } else {
            person::Entity::find()
                .filter(person::Column::Id.is_in(person_ids))
                .all(&self.db)
                .await
                .context("resolve favorite people")?
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect()
        };

        let planet_names: HashMap<i32, String> = if planet_ids.is_empty() {
            HashMap::new()
        } else {
            planet::Entity::find()
                .filter(planet::Column::Id.is_in(planet_ids))
                .all(&self.db)
                .await
                .context("resolve favorite planets")?
                .into_iter()
                .map(|p| (p.id, p.name))
                .collect()
        };

        let mut views = Vec::with_capacity(favorites.len());
        for f in favorites {
            let view = match (f.person_id, f.planet_id) {
                (Some(pid), None) => FavoriteView {
                    id: f.id,
                    kind: FavoriteKind::Person,
                    name: person_names.get(&pid).cloned().unwrap_or_default(),
                },
                (None, Some(pid)) => FavoriteView {
                    id: f.id,
                    kind: FavoriteKind::Planet,
                    name: planet_names.get(&pid).cloned().unwrap_or_default(),
                },
                _ => anyhow::bail!(
                    "favorite {} must reference exactly one of person or planet",
                    f.id
                ),
            };
            views.push(view);
        }
        Ok(views)
    }
}
