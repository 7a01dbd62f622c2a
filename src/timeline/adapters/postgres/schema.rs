//! Diesel schema for assignment history persistence.

diesel::table! {
    /// Append-only workflow events.
    timeline_events (id) {
        /// Event identifier.
        id -> Uuid,
        /// Insertion sequence used to keep append order stable.
        seq -> Int8,
        /// Owning assignment.
        assignment_id -> Uuid,
        /// Event kind.
        #[max_length = 50]
        event_type -> Varchar,
        /// Workflow status associated with the event.
        #[max_length = 100]
        assignment_status -> Nullable<Text>,
        /// Note payload in its wire shape.
        note -> Nullable<Jsonb>,
        /// Actor snapshot taken at write time.
        created_by -> Jsonb,
        /// Write timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Scheduled follow-ups.
    reminders (id) {
        /// Reminder identifier.
        id -> Uuid,
        /// Owning assignment.
        assignment_id -> Uuid,
        /// Due time.
        date_and_time -> Timestamptz,
        /// Reminder message.
        message -> Text,
        /// Lifecycle state.
        #[max_length = 20]
        status -> Varchar,
        /// Workflow status snapshot taken at scheduling time.
        #[max_length = 100]
        assignment_status -> Nullable<Text>,
        /// Actor snapshot taken at scheduling time.
        created_by -> Jsonb,
        /// Scheduling timestamp.
        created_at -> Timestamptz,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Assignment master records owned by the assignment management service.
    ///
    /// Only the columns read or written by the history core are declared.
    assignments (id) {
        /// Assignment identifier.
        id -> Uuid,
        /// Current workflow status.
        #[max_length = 100]
        assignment_status -> Nullable<Text>,
        /// Soft-deletion marker.
        deleted_at -> Nullable<Timestamptz>,
    }
}
