//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Only the columns the
//! access rules read are declared.

diesel::table! {
    /// Savings groups.
    ///
    /// The three leadership slots reference `members.id` and may be empty.
    groups (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name of the group.
        name -> Varchar,
        /// Group access code; unique when present.
        access_code -> Nullable<Varchar>,
        /// Member holding the presidency.
        president_id -> Nullable<Uuid>,
        /// Member holding the first vice-presidency.
        vice_president_1_id -> Nullable<Uuid>,
        /// Member holding the second vice-presidency.
        vice_president_2_id -> Nullable<Uuid>,
    }
}

diesel::table! {
    /// Group members.
    members (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning group.
        group_id -> Uuid,
        /// Member's full name.
        full_name -> Varchar,
        /// Personal access code; unique when present.
        member_code -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Financial categories within a group.
    financial_categories (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Owning group.
        group_id -> Uuid,
        /// Display name of the category.
        name -> Varchar,
        /// Locked categories are editable by privileged members only.
        is_locked -> Bool,
    }
}

diesel::table! {
    /// Role assignments scoped to a single financial category.
    category_roles (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Category the role applies to.
        category_id -> Uuid,
        /// Member holding the role.
        member_id -> Uuid,
        /// One of `presidente`, `secretario`, `asistente`.
        role -> Varchar,
        /// Inactive assignments are kept for history and ignored.
        is_active -> Bool,
    }
}

diesel::joinable!(members -> groups (group_id));
diesel::joinable!(financial_categories -> groups (group_id));
diesel::joinable!(category_roles -> financial_categories (category_id));
diesel::joinable!(category_roles -> members (member_id));

diesel::allow_tables_to_appear_in_same_query!(groups, members, financial_categories, category_roles);
