use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::auth::{
    LoginDto, LoginResponseDto, MessageDto, RegisterDto, RegisterResponseDto, UserDto,
};
use crate::presentation::handlers::blogs::{
    BlogDto, BlogInputDto, BlogMessageResponseDto, BlogResponseDto, BlogsResponseDto,
    FeaturedBlogsResponseDto,
};
use crate::presentation::handlers::users::UsersResponseDto;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::auth::register,
        crate::presentation::handlers::auth::login,
        crate::presentation::handlers::auth::logout,
        crate::presentation::handlers::users::list_users,
        crate::presentation::handlers::blogs::create_blog,
        crate::presentation::handlers::blogs::list_blogs,
        crate::presentation::handlers::blogs::get_blog,
        crate::presentation::handlers::blogs::update_blog,
        crate::presentation::handlers::blogs::delete_blog,
        crate::presentation::handlers::blogs::featured_blogs
    ),
    components(
        schemas(
            RegisterDto,
            LoginDto,
            UserDto,
            RegisterResponseDto,
            LoginResponseDto,
            MessageDto,
            UsersResponseDto,
            BlogInputDto,
            BlogDto,
            BlogMessageResponseDto,
            BlogResponseDto,
            BlogsResponseDto,
            FeaturedBlogsResponseDto
        )
    ),
    tags(
        (name = "auth", description = "Registration and sessions"),
        (name = "users", description = "Registered users"),
        (name = "blogs", description = "Blog posts")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("session id")
                    .build(),
            ),
        );
        openapi.components = Some(components);
    }
}
