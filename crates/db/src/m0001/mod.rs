mod contact_message;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mailroom",
    "m0001",
    vec_box![],
    vec_box![contact_message::CreateTable, contact_message::CreateIdx1]
);
