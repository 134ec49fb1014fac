//! Diesel schema for household record persistence.

diesel::table! {
    /// Person records.
    persons (id) {
        /// Person identifier.
        id -> Uuid,
        /// Person name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional contact email.
        #[max_length = 255]
        email -> Nullable<Varchar>,
        /// Opaque payload.
        data -> Jsonb,
    }
}

diesel::table! {
    /// Area records with their configured status tables.
    areas (id) {
        /// Area identifier.
        id -> Uuid,
        /// Area name.
        #[max_length = 255]
        name -> Varchar,
        /// Current status label.
        #[max_length = 255]
        status -> Nullable<Varchar>,
        /// Latest transition timestamp.
        updated -> Timestamptz,
        /// Payload including the status table.
        data -> Jsonb,
    }
}

diesel::table! {
    /// Template records.
    templates (id) {
        /// Template identifier.
        id -> Uuid,
        /// Template name.
        #[max_length = 255]
        name -> Varchar,
        /// Kind of record the template seeds.
        #[max_length = 50]
        kind -> Varchar,
        /// Opaque seed payload.
        data -> Jsonb,
    }
}

diesel::table! {
    /// Chore records with embedded task sequences.
    chores (id) {
        /// Chore identifier.
        id -> Uuid,
        /// Owning person identifier.
        person_id -> Uuid,
        /// Chore name.
        #[max_length = 255]
        name -> Varchar,
        /// Status label.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created -> Timestamptz,
        /// Latest lifecycle timestamp.
        updated -> Timestamptz,
        /// Lifecycle payload including the task sequence.
        data -> Jsonb,
    }
}

diesel::table! {
    /// Act records.
    acts (id) {
        /// Act identifier.
        id -> Uuid,
        /// Owning person identifier.
        person_id -> Uuid,
        /// Act name.
        #[max_length = 255]
        name -> Varchar,
        /// Free-form judgement label.
        #[max_length = 255]
        value -> Nullable<Varchar>,
        /// Creation timestamp.
        created -> Timestamptz,
        /// Act payload.
        data -> Jsonb,
    }
}

diesel::allow_tables_to_appear_in_same_query!(persons, areas, templates, chores, acts);
