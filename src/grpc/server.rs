/// gRPC server implementation
///
/// Implements the three RPCs from user_service.proto: CreateUser, GetUser,
/// UpdateUser. Converts between wire messages and the internal record;
/// validation happens in the service layer, identical to the HTTP path.
use chrono::{DateTime, Utc};
use tonic::{Request, Response, Status};

use super::users::v1::{
    user_service_server::UserService as UserServiceRpc, CreateUserRequest, CreateUserResponse,
    GetUserRequest, GetUserResponse, UpdateUserRequest, UpdateUserResponse, User as UserMessage,
};
use crate::models::{NewUser, User, UserUpdate};
use crate::services::UserService;

/// User service gRPC server
#[derive(Clone)]
pub struct UserGrpcServer {
    users: UserService,
}

impl UserGrpcServer {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }
}

#[tonic::async_trait]
impl UserServiceRpc for UserGrpcServer {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let req = request.into_inner();
        let new_user = NewUser {
            firstname: req.firstname,
            lastname: req.lastname,
            email: req.email,
            age: req.age,
        };

        let user = self.users.create_user(new_user).await?;

        Ok(Response::new(CreateUserResponse {
            user: Some(to_message(user)),
        }))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let req = request.into_inner();

        let user = self.users.get_user(req.id).await?;

        Ok(Response::new(GetUserResponse {
            user: Some(to_message(user)),
        }))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        let req = request.into_inner();
        let changes = UserUpdate {
            firstname: req.firstname,
            lastname: req.lastname,
            email: req.email,
            age: req.age,
        };

        let user = self.users.update_user(req.id, changes).await?;

        Ok(Response::new(UpdateUserResponse {
            user: Some(to_message(user)),
        }))
    }
}

/// Convert the internal record to its wire representation
fn to_message(user: User) -> UserMessage {
    UserMessage {
        id: user.id,
        firstname: user.firstname,
        lastname: user.lastname,
        email: user.email,
        age: user.age,
        created: Some(to_timestamp(user.created)),
    }
}

fn to_timestamp(dt: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_message_carries_all_fields() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let user = User {
            id: 7,
            firstname: "John".into(),
            lastname: "Doe".into(),
            email: "john.doe@example.com".into(),
            age: 30,
            created,
        };

        let msg = to_message(user);
        assert_eq!(msg.id, 7);
        assert_eq!(msg.firstname, "John");
        assert_eq!(msg.lastname, "Doe");
        assert_eq!(msg.email, "john.doe@example.com");
        assert_eq!(msg.age, 30);
        let ts = msg.created.unwrap();
        assert_eq!(ts.seconds, created.timestamp());
        assert_eq!(ts.nanos, 0);
    }

    #[test]
    fn test_to_timestamp_keeps_subsecond_precision() {
        let dt = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let ts = to_timestamp(dt);
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 123_456_789);
    }
}
