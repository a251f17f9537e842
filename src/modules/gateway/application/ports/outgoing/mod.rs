mod hrms_gateway;

pub use hrms_gateway::{
    GatewayError, GraphQLError, GraphQLRequest, GraphQLResponse, HrmsGateway, ProxyRequest,
    ProxyResponse, Variables,
};
