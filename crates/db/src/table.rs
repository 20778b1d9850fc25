use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum ContactMessage {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    IsRead,
    CreatedAt,
}
