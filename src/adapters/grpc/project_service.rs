//! gRPC implementation of the project API.
//!
//! Each handler reads the calling user's id from the configured metadata
//! key before touching the application layer, so unauthenticated requests
//! never reach the repository.

use tonic::{Request, Response, Status};

use crate::application::ProjectService;
use crate::domain::ports::ProjectRepository;

use super::get_header;
use super::proto::project_server::Project;
use super::proto::{
    DeleteProjectRequest, DeleteProjectResponse, GetProjectRequest, ProjectDescriptor,
};

/// The project API served over gRPC.
pub struct GrpcProjectService<R> {
    service: ProjectService<R>,
    auth_header: String,
}

impl<R: ProjectRepository> GrpcProjectService<R> {
    /// Wrap an application service, authenticating by `auth_header`.
    pub fn new(service: ProjectService<R>, auth_header: String) -> Self {
        Self {
            service,
            auth_header,
        }
    }
}

#[tonic::async_trait]
impl<R: ProjectRepository + 'static> Project for GrpcProjectService<R> {
    async fn create(
        &self,
        request: Request<ProjectDescriptor>,
    ) -> Result<Response<ProjectDescriptor>, Status> {
        let uid = get_header(&request, &self.auth_header)?;
        let descriptor = request.into_inner();

        let project = self.service.create(&uid, &descriptor.name).await?;
        Ok(Response::new(ProjectDescriptor {
            id: project.id,
            name: project.name,
        }))
    }

    async fn get(
        &self,
        request: Request<GetProjectRequest>,
    ) -> Result<Response<ProjectDescriptor>, Status> {
        let uid = get_header(&request, &self.auth_header)?;
        let req = request.into_inner();

        let project = self.service.find_by_name(&uid, &req.name).await?;
        Ok(Response::new(ProjectDescriptor {
            id: project.id,
            name: project.name,
        }))
    }

    async fn delete(
        &self,
        request: Request<DeleteProjectRequest>,
    ) -> Result<Response<DeleteProjectResponse>, Status> {
        let uid = get_header(&request, &self.auth_header)?;
        let req = request.into_inner();

        self.service.delete(&uid, &req.id).await?;
        Ok(Response::new(DeleteProjectResponse {}))
    }
}
